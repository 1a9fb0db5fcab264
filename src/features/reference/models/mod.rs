mod cause;
mod city;
mod department;
mod injury;
mod state;
mod story_link;
mod title;

pub use cause::Cause;
pub use city::City;
pub use department::Department;
pub use injury::Injury;
pub use state::State;
pub use story_link::StoryLink;
pub use title::Title;
