use core::fmt;
use std::rc::Rc;

use yew::Reducible;

/// The click counter. Only [`Counter::reduce`] produces new values.
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy)]
pub struct Counter {
    count: u64,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CounterAction {
    Increment,
}

impl Counter {
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "count is {}", self.count)
    }
}

impl Reducible for Counter {
    type Action = CounterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CounterAction::Increment => Rc::new(Counter {
                count: self.count.saturating_add(1),
            }),
        }
    }
}
