/// Port for the host's localization layer
///
/// Only used to render labels, help text and messages.
pub trait Translator: Send + Sync + 'static {
    fn translate(&self, template: &str) -> String;
}
