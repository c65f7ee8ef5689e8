mod home;
pub use home::SitePage;
