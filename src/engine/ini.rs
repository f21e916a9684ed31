use serde::Serialize;

use crate::errors::Errors;

use super::constants::FLICKER_INI_ID;

pub type ActorId = usize;

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Actor {
    pub flags: u16,
    pub priority_layer: i16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IniRecord {
    pub id: u16,
    pub flags: u16,
    pub field_12: i16,
    pub actor: Option<ActorId>,
}

impl IniRecord {
    pub fn new(id: u16) -> IniRecord {
        IniRecord {
            id,
            flags: 0,
            field_12: 0,
            actor: None,
        }
    }
}

pub struct IniResource {
    records: Vec<IniRecord>,
    flicker: Option<u16>,
}

impl IniResource {
    /// Creates `count` blank records. Record 0 is the flicker record and owns actor 0.
    pub fn new(count: usize) -> IniResource {
        let mut records: Vec<IniRecord> = (0..count).map(|id| IniRecord::new(id as u16)).collect();

        let flicker = match records.get_mut(FLICKER_INI_ID as usize) {
            Some(record) => {
                record.actor = Some(0);
                Some(FLICKER_INI_ID)
            }
            None => None,
        };

        IniResource { records, flicker }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn get(&self, id: u16) -> Result<&IniRecord, Errors> {
        self.records.get(id as usize).ok_or(Errors::IniRecordMissing { id })
    }

    pub fn get_mut(&mut self, id: u16) -> Result<&mut IniRecord, Errors> {
        self.records.get_mut(id as usize).ok_or(Errors::IniRecordMissing { id })
    }

    pub fn flicker_id(&self) -> Option<u16> {
        self.flicker
    }

    pub fn flicker_record_mut(&mut self) -> Result<&mut IniRecord, Errors> {
        let id = self.flicker.ok_or(Errors::FlickerRecordMissing)?;
        self.get_mut(id)
    }

    pub fn set_flicker_record(&mut self, id: Option<u16>) {
        self.flicker = id;
    }

    pub fn records(&self) -> &[IniRecord] {
        &self.records
    }
}
