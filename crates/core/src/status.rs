//! Text status enums stored in `TEXT` columns guarded by `CHECK` constraints.
//!
//! Each variant's string form matches the values allowed by the constraint in
//! the corresponding migration. The terminal variant is the value a soft
//! delete moves a row to.

use serde::{Deserialize, Serialize};

macro_rules! define_text_status {
    (
        $(#[$meta:meta])*
        $name:ident terminal = $terminal:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $val)] $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// The value a soft delete moves a row to.
            pub const TERMINAL: $name = $name::$terminal;

            /// Database / wire representation.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $val ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $val => Ok($name::$variant), )+
                    other => Err(format!(
                        "Invalid {} '{}'. Must be one of: {}",
                        stringify!($name),
                        other,
                        [$( $val ),+].join(", ")
                    )),
                }
            }
        }
    };
}

define_text_status! {
    /// Trial-class booking lifecycle.
    TrialClassStatus terminal = Cancelled {
        Pending = "PENDING",
        Confirmed = "CONFIRMED",
        Cancelled = "CANCELLED",
    }
}

define_text_status! {
    /// Contact inquiry handling progress.
    ContactStatus terminal = Done {
        New = "NEW",
        InProgress = "IN_PROGRESS",
        Done = "DONE",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trial_class_strings_match_check_constraint() {
        assert_eq!(TrialClassStatus::Pending.as_str(), "PENDING");
        assert_eq!(TrialClassStatus::Confirmed.as_str(), "CONFIRMED");
        assert_eq!(TrialClassStatus::Cancelled.as_str(), "CANCELLED");
        assert_eq!(TrialClassStatus::TERMINAL, TrialClassStatus::Cancelled);
    }

    #[test]
    fn contact_strings_match_check_constraint() {
        let all: Vec<&str> = ContactStatus::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(all, vec!["NEW", "IN_PROGRESS", "DONE"]);
        assert_eq!(ContactStatus::TERMINAL, ContactStatus::Done);
    }

    #[test]
    fn serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&ContactStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");

        let parsed: TrialClassStatus = serde_json::from_str("\"CONFIRMED\"").unwrap();
        assert_eq!(parsed, TrialClassStatus::Confirmed);
    }

    #[test]
    fn unknown_value_is_rejected() {
        assert!(serde_json::from_str::<ContactStatus>("\"ARCHIVED\"").is_err());

        let err = "archived".parse::<ContactStatus>().unwrap_err();
        assert!(err.contains("NEW, IN_PROGRESS, DONE"), "got: {err}");
    }

    #[test]
    fn from_str_round_trips_display() {
        for status in TrialClassStatus::ALL {
            assert_eq!(status.to_string().parse::<TrialClassStatus>(), Ok(*status));
        }
    }
}
