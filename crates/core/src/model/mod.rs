mod company;
mod ids;
mod question;

pub use company::{Company, CompanyError};
pub use ids::QuestionId;
pub use question::{PracticeQuestion, QuestionError};
