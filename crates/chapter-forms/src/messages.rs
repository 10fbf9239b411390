// File: src/messages.rs
// Purpose: User-facing validation messages

pub const UNIVERSITY: &str = "Please enter a valid university name";
pub const ADDRESS: &str = "Please enter a valid address";
pub const NAME: &str = "Please enter a name";
pub const SELECT_OPTION: &str = "Please select an option";
pub const WEBSITE: &str = "Please enter a valid website link";
pub const LINKEDIN: &str = "Please enter a valid LinkedIn profile";
pub const EMAIL: &str = "Enter a valid email";
pub const PHONE_DIGITS: &str = "Only numbers are allowed";
pub const PHONE_LENGTH: &str = "Please enter a valid contact number";
pub const ROLE: &str = "Select a role";
pub const SELECT_ONE: &str = "Please select one option";
pub const TOO_FEW_MEMBERS: &str = "At least 4 founding members are required";
pub const TOO_MANY_MEMBERS: &str = "Maximum 6 founding members allowed";
pub const DOCUMENT: &str = "Please upload a valid document";
pub const CHAPTER_PLAN: &str = "Chapter plan must be at least 200 words";
pub const NECESSARY: &str = "This is a necessary selection";
