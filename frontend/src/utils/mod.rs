pub mod group_form;

pub use group_form::{GroupDraft, GroupFormFeedback};
