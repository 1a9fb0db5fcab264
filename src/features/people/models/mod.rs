mod person;
mod person_detail;
mod source;
mod victim;

pub use person::{person_url, Person};
pub use person_detail::{PersonDetail, VictimRecord};
pub use source::SourceDetail;
pub use victim::VictimDetail;
