mod calculator_form;
mod footer;
mod result_card;
mod section;

pub use calculator_form::CalculatorForm;
pub use footer::Footer;
pub use result_card::ResultCard;
pub use section::Section;
