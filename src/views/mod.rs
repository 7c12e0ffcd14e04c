pub mod home_view;

pub use home_view::HomeView;
