pub mod service_user;
