//! Known events and event-call detection.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use zdoc_ir::{Token, TokenKind, TokenSequence};

/// A call whose arguments name an event.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct EventCallSite {
    pub callee: &'static str,
    /// The event name is the token before this comma of the line (1-based).
    pub event_argument: usize,
    /// `true` for connection calls, `false` for dispatching ones.
    pub listens: bool,
}

/// Calls recognized in source lines, tried in order.
pub const EVENT_CALL_SITES: &[EventCallSite] = &[
    EventCallSite {
        callee: "DispatchEvent",
        event_argument: 1,
        listens: false,
    },
    EventCallSite {
        callee: "CreateCollisionEvent",
        event_argument: 3,
        listens: false,
    },
    EventCallSite {
        callee: "Dispatch",
        event_argument: 1,
        listens: false,
    },
    EventCallSite {
        callee: "SendButtonEvent",
        event_argument: 2,
        listens: false,
    },
    EventCallSite {
        callee: "QueueSyncedEvent",
        event_argument: 1,
        listens: false,
    },
    EventCallSite {
        callee: "Connect",
        event_argument: 2,
        listens: true,
    },
    EventCallSite {
        callee: "ConnectThisTo",
        event_argument: 2,
        listens: true,
    },
];

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum EventRole {
    Sends,
    Listens,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct EventDoc {
    pub name: String,
    #[serde(default)]
    pub senders: Vec<String>,
    #[serde(default)]
    pub listeners: Vec<String>,
}

/// Every known event, indexed by name.
#[derive(Clone, Debug, Default)]
pub struct EventList {
    events: Vec<EventDoc>,
    index: FxHashMap<String, usize>,
}

impl EventList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        let mut list = Self::new();
        for name in names {
            list.add(name);
        }
        list
    }

    /// Register an event. Returns `false` if it was already known.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.index.contains_key(&name) {
            return false;
        }
        self.index.insert(name.clone(), self.events.len());
        self.events.push(EventDoc {
            name,
            ..EventDoc::default()
        });
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&EventDoc> {
        self.index.get(name).map(|&i| &self.events[i])
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EventDoc> {
        self.events.iter()
    }

    /// Record `class` as a sender or listener of a known event.
    pub fn record(&mut self, event: &str, class: &str, role: EventRole) -> bool {
        let Some(&i) = self.index.get(event) else {
            return false;
        };
        let doc = &mut self.events[i];
        match role {
            EventRole::Sends => doc.senders.push(class.to_string()),
            EventRole::Listens => doc.listeners.push(class.to_string()),
        }
        true
    }

    /// Sort events by name and their sender and listener lists, dropping
    /// duplicates.
    pub fn sort_and_prune(&mut self) {
        for doc in &mut self.events {
            doc.senders.sort();
            doc.senders.dedup();
            doc.listeners.sort();
            doc.listeners.dedup();
        }
        self.events.sort_by(|a, b| a.name.cmp(&b.name));
        self.index.clear();
        for (i, doc) in self.events.iter().enumerate() {
            self.index.insert(doc.name.clone(), i);
        }
    }
}

/// Find the first event call in a tokenized source line.
///
/// A call site applies when its callee appears in the line and the token
/// before its `event_argument`-th comma (counted from the start of the line)
/// names a known event.
pub fn detect_event_call<'t>(tokens: &'t TokenSequence, events: &EventList) -> Option<(&'t str, EventRole)> {
    EVENT_CALL_SITES.iter().find_map(|site| {
        if !tokens.contains_token(&Token::word(site.callee)) {
            return None;
        }
        let comma = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is(TokenKind::Comma))
            .nth(site.event_argument - 1)
            .map(|(i, _)| i)?;
        let name = tokens.get(comma.checked_sub(1)?)?.text.as_str();
        if !events.contains(name) {
            return None;
        }
        let role = if site.listens {
            EventRole::Listens
        } else {
            EventRole::Sends
        };
        Some((name, role))
    })
}
