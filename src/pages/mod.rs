pub mod about;
pub mod contact;
pub mod gallery;
pub mod home;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use gallery::GalleryPage;
pub use home::HomePage;
