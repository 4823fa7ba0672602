//! Reducer wrapper around the core session.

use std::rc::Rc;

use tactics_core::{Session, SessionAction};
use yew::prelude::*;

/// Session state held by the root component.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardState {
    pub session: Session,
}

impl Reducible for BoardState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.session.reduce(action);
        if next == self.session {
            return self;
        }
        Rc::new(Self { session: next })
    }
}

pub type BoardHandle = UseReducerHandle<BoardState>;
