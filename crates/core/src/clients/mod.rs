pub mod notification;
pub mod profile;

pub use notification::NotificationClient;
pub use profile::{Contact, ProfileClient};
