//! Reference unions built on `sumcodec`, one per discriminator convention,
//! plus the logic behind the `sumcodec-roundtrip` binary.

pub mod barcode;
pub mod cli;
pub mod login_user;
pub mod pair;
pub mod planet;
pub mod state;
pub mod user;
pub mod user_auth;

pub use barcode::{Barcode, BarcodeFlag, BarcodeValue, CodableBarcode};
pub use cli::{roundtrip, CliError, KINDS};
pub use login_user::LoginUser;
pub use pair::{sample_pairs, Pair};
pub use planet::Planet;
pub use state::State;
pub use user::User;
pub use user_auth::UserAuth;
