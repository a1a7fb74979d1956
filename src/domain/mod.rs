//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{AliasParameters, GeneratePasswordParameters};
pub use response::{Account, Alias, Domain, GeneratedPassword, Identified, Reference};
pub use validation::ValidationError;
pub use value::{AliasName, ApiKey, DomainName};
