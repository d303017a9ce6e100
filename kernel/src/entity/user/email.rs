use error_stack::Report;
use vodca::{AsRefln, Fromln};

use crate::KernelError;

pub const EMAIL_DOMAINS: [&str; 3] = [".com", ".edu", ".org"];

/// An address containing `@` and ending with one of [`EMAIL_DOMAINS`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct UserEmail(String);

impl UserEmail {
    pub fn new(address: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let address = address.into();
        let has_domain = EMAIL_DOMAINS
            .iter()
            .any(|domain| address.ends_with(domain));
        if !address.contains('@') || !has_domain {
            return Err(Report::new(KernelError::InvalidEmail).attach_printable(format!(
                "The email {address} is invalid, please ensure it has an @ and a .com, .edu, or .org domain."
            )));
        }
        Ok(Self(address))
    }
}

#[cfg(test)]
mod test {
    use rstest::rstest;

    use crate::entity::UserEmail;
    use crate::KernelError;

    #[rstest]
    #[case("alice@example.com")]
    #[case("bob@school.edu")]
    #[case("carol@charity.org")]
    fn accepts_known_domains(#[case] address: &str) {
        let email = UserEmail::new(address).unwrap();
        let inner: &String = email.as_ref();
        assert_eq!(inner, address);
    }

    #[rstest]
    #[case("alice.example.com")]
    #[case("alice@example.net")]
    #[case("alice@example.com.au")]
    #[case("")]
    fn rejects_malformed(#[case] address: &str) {
        let report = UserEmail::new(address).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::InvalidEmail);
    }
}
