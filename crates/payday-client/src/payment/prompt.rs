use payday_core::Plan;

/// Asks the user for the phone number to charge.
///
/// `None` means the prompt was dismissed.
pub trait PhonePrompt {
    fn ask_phone(&mut self, plan: &Plan) -> Option<String>;
}

impl<F> PhonePrompt for F
where
    F: FnMut(&Plan) -> Option<String>,
{
    fn ask_phone(&mut self, plan: &Plan) -> Option<String> {
        self(plan)
    }
}

/// A prompt answered in advance, e.g. from a `--phone` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPhone(pub Option<String>);

impl PhonePrompt for FixedPhone {
    fn ask_phone(&mut self, _plan: &Plan) -> Option<String> {
        self.0.clone()
    }
}
