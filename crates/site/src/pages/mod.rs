mod calculator;
mod glossary;
mod home;
mod not_found;

pub use calculator::CalculatorPage;
pub use glossary::GlossaryPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
