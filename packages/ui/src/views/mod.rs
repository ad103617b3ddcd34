mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod confirmation_dialog;
pub use confirmation_dialog::ConfirmationDialog;

mod home;
pub use home::HomeView;

mod payment;
pub use payment::PaymentView;

mod success;
pub use success::SuccessView;
