pub mod controller;
pub mod error;
pub mod format;
pub mod forms;
pub mod ops;
pub mod status;

pub use controller::{ActiveModal, RentalInbox, SubmitError, WithdrawalHistory, WithdrawalInbox, WithdrawalModal};
pub use error::OpError;
pub use forms::{
    AcceptForm, AcceptPayload, ApprovalForm, ApprovePayload, CreateRentalForm, CreateRentalPayload,
    CreateWithdrawalForm, CreateWithdrawalPayload, FormError, OTHER_REASON, REJECT_REASONS, RejectForm,
};
pub use ops::{RentalOps, WithdrawalOps};
pub use status::{StatusBadge, Tone, priority_badge, rental_badge, withdrawal_badge};
