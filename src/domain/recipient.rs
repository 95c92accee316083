use super::email::EmailAddress;

/// Decides where an outbound email really goes.
///
/// While the sending domain is unverified with the provider, only the account's
/// own address may receive mail, so in testing mode every recipient is replaced.
#[derive(Debug, Clone)]
pub struct RecipientPolicy {
    testing_mode: bool,
    verified: EmailAddress,
}

impl RecipientPolicy {
    pub fn new(testing_mode: bool, verified: EmailAddress) -> Self {
        Self {
            testing_mode,
            verified,
        }
    }

    pub fn testing_mode(&self) -> bool {
        self.testing_mode
    }

    pub fn resolve<'a>(&'a self, intended: &'a EmailAddress) -> &'a EmailAddress {
        if self.testing_mode {
            &self.verified
        } else {
            intended
        }
    }
}
