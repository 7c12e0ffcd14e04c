pub mod default_layout;

pub use default_layout::DefaultLayout;
