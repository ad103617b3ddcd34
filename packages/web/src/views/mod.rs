mod home;
pub use home::Home;

mod forms;
pub use forms::{Interest, Join};

mod account;
pub use account::Account;

mod success;
pub use success::{InterestSuccess, Success};
