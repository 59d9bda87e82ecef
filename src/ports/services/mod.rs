mod reference_generator;
mod translator;

pub use reference_generator::ReferenceGenerator;
pub use translator::Translator;
