use std::collections::btree_map::BTreeMap;
use std::ops::Bound;

use super::Table as TableTrait;
use super::TableBuilder as TableBuilderTrait;
use super::TableCursor as TableCursorTrait;
use super::{compare_bytes, Error, KeyValuePair};

//////////////////////////////////////////////// Key ///////////////////////////////////////////////

#[derive(Clone, Debug, Eq)]
pub struct Key {
    pub key: Vec<u8>,
    pub timestamp: u64,
}

impl<'a> PartialEq for Key {
    fn eq(&self, rhs: &Key) -> bool {
        self.cmp(rhs) == std::cmp::Ordering::Equal
    }
}

impl<'a> Ord for Key {
    fn cmp(&self, rhs: &Key) -> std::cmp::Ordering {
        let key_lhs = &self.key;
        let key_rhs = &rhs.key;
        let ts_lhs = self.timestamp;
        let ts_rhs = rhs.timestamp;
        compare_bytes(key_lhs, key_rhs).then(ts_rhs.cmp(&ts_lhs))
    }
}

impl<'a> PartialOrd for Key {
    fn partial_cmp(&self, rhs: &Key) -> Option<std::cmp::Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Key {
    pub const BOTTOM: Key = Key {
        key: Vec::new(),
        timestamp: 0,
    };
}

/////////////////////////////////////////////// Table //////////////////////////////////////////////

#[derive(Clone, Debug, Default)]
struct Table {
    entries: BTreeMap<Key, Option<Vec<u8>>>,
}

impl<'a> TableTrait<'a> for Table {
    type Builder = TableBuilder;
    type Cursor = TableCursor<'a>;

    fn get(&'a self, key: &[u8], timestamp: u64) -> Option<KeyValuePair<'a>> {
        let start = Key {
            key: key.to_vec(),
            timestamp,
        };
        let limit = Key {
            key: key.to_vec(),
            timestamp: 0,
        };
        match self
            .entries
            .range((Bound::Included(start), Bound::Included(limit)))
            .next()
        {
            Some(entry) => Some(KeyValuePair {
                key: &entry.0.key,
                timestamp: entry.0.timestamp,
                value: match entry.1 {
                    Some(x) => Some(&x),
                    None => None,
                },
            }),
            None => None,
        }
    }

    fn iterate(&'a self) -> Self::Cursor {
        TableCursor {
            table: self,
            position: TablePosition::default(),
        }
    }
}

/////////////////////////////////////////// TableBuilder ///////////////////////////////////////////

#[derive(Clone, Debug, Default)]
struct TableBuilder {
    table: Table,
}

impl<'a> TableBuilderTrait<'a> for TableBuilder {
    type Table = Table;

    fn put(&mut self, key: &[u8], timestamp: u64, value: &[u8]) -> Result<(), Error> {
        let key = Key {
            key: key.to_vec(),
            timestamp,
        };
        let value = value.to_vec();
        self.table.entries.insert(key, Some(value));
        Ok(())
    }

    fn del(&mut self, key: &[u8], timestamp: u64) -> Result<(), Error> {
        let key = Key {
            key: key.to_vec(),
            timestamp,
        };
        self.table.entries.insert(key, None);
        Ok(())
    }

    fn seal(self) -> Result<Table, Error> {
        Ok(self.table)
    }
}

/////////////////////////////////////////// TablePosition //////////////////////////////////////////

#[derive(Clone, Debug)]
enum TablePosition {
    First,
    Last,
    Forward { last_key: Key },
    Reverse { last_key: Key },
}

impl Default for TablePosition {
    fn default() -> Self {
        TablePosition::First
    }
}

//////////////////////////////////////////// TableCursor ///////////////////////////////////////////

#[derive(Clone, Debug)]
struct TableCursor<'a> {
    table: &'a Table,
    position: TablePosition,
}

impl<'a> TableCursorTrait<'a> for TableCursor<'a> {
    fn seek_to_first(&mut self) -> Result<(), Error> {
        self.position = TablePosition::First;
        Ok(())
    }

    fn seek_to_last(&mut self) -> Result<(), Error> {
        self.position = TablePosition::Last;
        Ok(())
    }

    fn seek(&mut self, key: &[u8], timestamp: u64) -> Result<(), Error> {
        let target = Key {
            key: key.to_vec(),
            timestamp,
        };
        match self
            .table
            .entries
            .range((Bound::Included(target), Bound::Unbounded))
            .next()
        {
            Some(entry) => {
                self.position = TablePosition::Forward {
                    last_key: entry.0.clone(),
                };
                self.prev()?;
            }
            None => {
                self.position = TablePosition::Last;
            }
        };
        Ok(())
    }

    fn prev(&mut self) -> Result<Option<KeyValuePair>, Error> {
        let bound = match &self.position {
            TablePosition::First => {
                return Ok(None);
            }
            TablePosition::Last => Bound::Unbounded,
            TablePosition::Forward { last_key } => Bound::Excluded(last_key.clone()),
            TablePosition::Reverse { last_key } => Bound::Excluded(last_key.clone()),
        };
        match self
            .table
            .entries
            .range((Bound::Included(Key::BOTTOM), bound))
            .rev()
            .next()
        {
            Some(entry) => {
                self.position = TablePosition::Reverse {
                    last_key: entry.0.clone(),
                };
                Ok(Some(KeyValuePair {
                    key: &entry.0.key,
                    timestamp: entry.0.timestamp,
                    value: match entry.1 {
                        Some(v) => Some(&v),
                        None => None,
                    },
                }))
            }
            None => {
                self.position = TablePosition::First;
                Ok(None)
            }
        }
    }

    fn next(&mut self) -> Result<Option<KeyValuePair>, Error> {
        let bound = match &self.position {
            TablePosition::First => Bound::Excluded(Key::BOTTOM),
            TablePosition::Last => {
                return Ok(None);
            }
            TablePosition::Forward { last_key } => Bound::Excluded(last_key.clone()),
            TablePosition::Reverse { last_key } => Bound::Excluded(last_key.clone()),
        };
        match self.table.entries.range((bound, Bound::Unbounded)).next() {
            Some(entry) => {
                self.position = TablePosition::Forward {
                    last_key: entry.0.clone(),
                };
                Ok(Some(KeyValuePair {
                    key: &entry.0.key,
                    timestamp: entry.0.timestamp,
                    value: match entry.1 {
                        Some(v) => Some(&v),
                        None => None,
                    },
                }))
            }
            None => {
                self.position = TablePosition::Last;
                Ok(None)
            }
        }
    }
}


#[cfg(test)]
mod tables {
    use super::*;

    #[test]
    fn empty() {
        let table = TableBuilder::default().seal().unwrap();
        let mut iter = table.iterate();
        let got = iter.next().unwrap();
        assert_eq!(None, got);
    }
}
