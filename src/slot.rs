use ufmt::{uDisplay, uWrite, Formatter};
use ufmt_macros::uDebug;

use crate::Millimetres;
use crate::PumpId;

/// Number of slots on the machine.
pub const SLOT_COUNT: usize = 10;

/// Number of slots served by cycled dispensers; the rest are pumps.
const CYCLED_SLOTS: u8 = 6;

/// A valid slot number, `1..=10`.
#[derive(Debug, uDebug, Clone, Copy, PartialEq, Eq)]
pub struct Slot(u8);
impl Slot {
    /// Returns `None` if `number` is not a slot on this machine.
    pub fn new(number: u8) -> Option<Self> {
        if (1..=SLOT_COUNT as u8).contains(&number) {
            Some(Self(number))
        } else {
            None
        }
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    /// Zero-based index into per-slot tables.
    pub fn index(&self) -> usize {
        (self.0 - 1) as usize
    }

    pub fn kind(&self) -> SlotKind {
        match self.0.checked_sub(CYCLED_SLOTS + 1).and_then(PumpId::new) {
            Some(pump) => SlotKind::Pump(pump),
            None => SlotKind::Cycled,
        }
    }
}

impl uDisplay for Slot {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        uDisplay::fmt(&self.0, f)
    }
}

/// How a slot delivers liquid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// An optic-style dispenser which delivers a fixed volume each time the
    /// cup is pushed up into it.
    Cycled,
    /// A relay-driven pump, dosed by time and checked by weight.
    Pump(PumpId),
}

/// Horizontal position of every slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotTable {
    positions: [Millimetres; SLOT_COUNT],
}
impl SlotTable {
    pub const fn new(positions: [Millimetres; SLOT_COUNT]) -> Self {
        Self { positions }
    }

    /// Physical X position of a slot.
    pub fn position(&self, slot: Slot) -> Millimetres {
        self.positions[slot.index()]
    }
}
impl Default for SlotTable {
    /// The pumps all sit at the home end of the rail.
    fn default() -> Self {
        let mm = Millimetres::new;
        Self::new([
            mm(90.0),
            mm(140.0),
            mm(190.0),
            mm(240.0),
            mm(290.0),
            mm(340.0),
            mm(0.0),
            mm(0.0),
            mm(0.0),
            mm(0.0),
        ])
    }
}
