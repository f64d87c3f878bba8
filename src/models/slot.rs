use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// One of the fixed times-of-day that can be booked. The set is static and
/// identical for every date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SlotTime {
    NineAm,
    ElevenAm,
    OnePm,
    ThreePm,
    FivePm,
}

impl SlotTime {
    /// Every bookable time, ascending.
    pub const ALL: [SlotTime; 5] = [
        SlotTime::NineAm,
        SlotTime::ElevenAm,
        SlotTime::OnePm,
        SlotTime::ThreePm,
        SlotTime::FivePm,
    ];

    /// Canonical 24-hour form, used for storage. Sorts lexicographically.
    pub fn as_24h(&self) -> &'static str {
        match self {
            SlotTime::NineAm => "09:00",
            SlotTime::ElevenAm => "11:00",
            SlotTime::OnePm => "13:00",
            SlotTime::ThreePm => "15:00",
            SlotTime::FivePm => "17:00",
        }
    }

    /// 12-hour form used on the wire and in customer-facing text.
    pub fn display(&self) -> &'static str {
        match self {
            SlotTime::NineAm => "09:00 AM",
            SlotTime::ElevenAm => "11:00 AM",
            SlotTime::OnePm => "01:00 PM",
            SlotTime::ThreePm => "03:00 PM",
            SlotTime::FivePm => "05:00 PM",
        }
    }

    pub fn from_24h(s: &str) -> Option<SlotTime> {
        SlotTime::ALL.into_iter().find(|t| t.as_24h() == s)
    }

    /// Accepts either the 12-hour wire form ("03:00 PM") or the canonical
    /// 24-hour form ("15:00"), case-insensitively.
    pub fn parse(s: &str) -> Option<SlotTime> {
        let normalized = s.trim().to_uppercase();
        SlotTime::ALL
            .into_iter()
            .find(|t| t.display() == normalized || t.as_24h() == normalized)
    }
}

impl std::fmt::Display for SlotTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display())
    }
}

impl Serialize for SlotTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display())
    }
}

impl<'de> Deserialize<'de> for SlotTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        SlotTime::parse(&s).ok_or_else(|| de::Error::custom(format!("invalid slot time: {s}")))
    }
}

/// A bookable (date, time) unit. Generated on demand from the fixed time set
/// and the ledger; never stored as its own record.
#[derive(Debug, Clone, Serialize)]
pub struct Slot {
    pub date: NaiveDate,
    pub time: SlotTime,
    pub available: bool,
}
