use std::collections::HashMap;

use crate::api::grid_dto::{GridDto, SlotStateDto};
use crate::domain::table::Table;
use crate::domain::utils::id::TableId;
use crate::error::{Error, Result};

/// Timeslots are numbered 1..=MAX_TIMESLOTS.
pub const MAX_TIMESLOTS: TimeslotId = 6;

pub type TimeslotId = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotState {
    Open,
    Occupied,
}

pub fn map_slot_state(dto_state: SlotStateDto) -> SlotState {
    match dto_state {
        SlotStateDto::Open => SlotState::Open,
        SlotStateDto::Occupied => SlotState::Occupied,
    }
}

/// One seating period: the state of every table, aligned by column with the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeslot {
    id: TimeslotId,
    states: Vec<SlotState>,
}

impl Timeslot {
    pub fn get_id(&self) -> TimeslotId {
        self.id
    }

    pub fn get_states(&self) -> &[SlotState] {
        &self.states
    }

    pub fn get_state(&self, position: usize) -> Option<SlotState> {
        self.states.get(position).copied()
    }
}

/// The restaurant layout: the table schema plus one row of states per timeslot.
///
/// The grid is read-only once built. Construction checks that
/// - there is at least one table and one timeslot,
/// - table labels are well-formed and unique,
/// - timeslot ids lie in 1..=6 and are strictly increasing,
/// - every timeslot holds exactly one state per table.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    tables: Vec<Table>,
    timeslots: Vec<Timeslot>,

    /// Lookup TableId -> position in `tables`.
    table_index: HashMap<TableId, usize>,
}

impl OccupancyGrid {
    pub fn new<S: AsRef<str>>(labels: &[S], rows: Vec<(TimeslotId, Vec<SlotState>)>) -> Result<Self> {
        if labels.is_empty() {
            return Err(Error::GridConstructionError("grid has no tables".to_string()));
        }
        if rows.is_empty() {
            return Err(Error::GridConstructionError("grid has no timeslots".to_string()));
        }

        let mut tables = Vec::with_capacity(labels.len());
        let mut table_index = HashMap::with_capacity(labels.len());

        for (position, label) in labels.iter().enumerate() {
            let table = Table::parse(label.as_ref(), position)?;

            if table_index.insert(table.get_id().clone(), position).is_some() {
                return Err(Error::GridConstructionError(format!("table {} appears more than once in the schema", table.get_id())));
            }
            tables.push(table);
        }

        let mut timeslots: Vec<Timeslot> = Vec::with_capacity(rows.len());

        for (id, states) in rows {
            if id == 0 || id > MAX_TIMESLOTS {
                return Err(Error::GridConstructionError(format!("timeslot {} is outside of 1..={}", id, MAX_TIMESLOTS)));
            }

            if let Some(previous) = timeslots.last() {
                if previous.id >= id {
                    return Err(Error::GridConstructionError(format!(
                        "timeslot {} follows timeslot {}; timeslots must be strictly increasing",
                        id, previous.id
                    )));
                }
            }

            if states.len() != tables.len() {
                return Err(Error::GridConstructionError(format!(
                    "timeslot {} has {} states but the schema has {} tables",
                    id,
                    states.len(),
                    tables.len()
                )));
            }

            timeslots.push(Timeslot { id, states });
        }

        log::debug!("Built occupancy grid with {} tables and {} timeslots.", tables.len(), timeslots.len());

        Ok(OccupancyGrid { tables, timeslots, table_index })
    }

    pub fn from_dto(dto: GridDto) -> Result<Self> {
        let rows = dto.timeslots.into_iter().map(|slot| (slot.id, slot.states.into_iter().map(map_slot_state).collect())).collect();

        Self::new(&dto.tables, rows)
    }

    pub fn get_tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn get_timeslots(&self) -> &[Timeslot] {
        &self.timeslots
    }

    pub fn get_num_of_tables(&self) -> usize {
        self.tables.len()
    }

    /// Looks up a table of the schema.
    ///
    /// # Returns
    /// `Error::InvalidTable` if `table_id` is not part of the schema.
    pub fn get_table(&self, table_id: &TableId) -> Result<&Table> {
        self.table_index.get(table_id).map(|&position| &self.tables[position]).ok_or_else(|| Error::InvalidTable(table_id.clone()))
    }

    pub fn get_state(&self, timeslot: TimeslotId, position: usize) -> Option<SlotState> {
        self.timeslots.iter().find(|slot| slot.id == timeslot).and_then(|slot| slot.get_state(position))
    }

    pub fn is_open(&self, timeslot: TimeslotId, position: usize) -> bool {
        self.get_state(timeslot, position) == Some(SlotState::Open)
    }
}
