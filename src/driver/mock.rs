// src/driver/mock.rs

// Test double shared by the sync and async driver tests. Records every write,
// serves staged read responses and advances a virtual clock on delays.

#![allow(dead_code)]

use crate::common::hal_traits::{Sht3xBus, Sht3xTimer};
#[cfg(feature = "async")]
use crate::common::hal_traits::{Sht3xBusAsync, Sht3xTimerAsync};
use std::collections::VecDeque;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MockBusError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusEvent {
    Begin,
    Write { address: u8, bytes: Vec<u8> },
    Read { address: u8, requested: usize },
    Delay { us: u64 },
}

#[derive(Debug, Clone, Default)]
pub struct MockInterface {
    pub events: Vec<BusEvent>,
    pub current_time_us: u64,
    pub begin_fails: bool,
    pub fail_writes: bool,
    read_queue: VecDeque<Vec<u8>>,
}

impl MockInterface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the bytes the next read will deliver. Fewer bytes than requested
    /// simulates a short read.
    pub fn stage_read_data(&mut self, data: &[u8]) {
        self.read_queue.push_back(data.to_vec());
    }

    pub fn writes(&self) -> Vec<(u8, Vec<u8>)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                BusEvent::Write { address, bytes } => Some((*address, bytes.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn reads(&self) -> usize {
        self.events.iter().filter(|e| matches!(e, BusEvent::Read { .. })).count()
    }

    /// Total delay recorded after the `index`-th event.
    pub fn delay_after(&self, index: usize) -> u64 {
        self.events[index + 1..]
            .iter()
            .take_while(|e| matches!(e, BusEvent::Delay { .. }))
            .map(|e| match e {
                BusEvent::Delay { us } => *us,
                _ => 0,
            })
            .sum()
    }

    fn do_begin(&mut self) -> Result<(), MockBusError> {
        self.events.push(BusEvent::Begin);
        if self.begin_fails {
            Err(MockBusError)
        } else {
            Ok(())
        }
    }

    fn do_write(&mut self, address: u8, bytes: &[u8]) -> Result<(), MockBusError> {
        self.events.push(BusEvent::Write { address, bytes: bytes.to_vec() });
        if self.fail_writes {
            Err(MockBusError)
        } else {
            Ok(())
        }
    }

    fn do_read(&mut self, address: u8, buffer: &mut [u8]) -> Result<usize, MockBusError> {
        self.events.push(BusEvent::Read { address, requested: buffer.len() });
        let staged = self.read_queue.pop_front().unwrap_or_default();
        let n = staged.len().min(buffer.len());
        buffer[..n].copy_from_slice(&staged[..n]);
        Ok(n)
    }

    fn advance_time(&mut self, us: u64) {
        self.current_time_us = self.current_time_us.saturating_add(us);
        self.events.push(BusEvent::Delay { us });
    }
}

impl Sht3xTimer for MockInterface {
    fn delay_us(&mut self, us: u32) {
        self.advance_time(us as u64);
    }
    fn delay_ms(&mut self, ms: u32) {
        self.advance_time((ms as u64) * 1000);
    }
}

impl Sht3xBus for MockInterface {
    type Error = MockBusError;

    fn begin(&mut self) -> Result<(), Self::Error> {
        self.do_begin()
    }
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.do_write(address, bytes)
    }
    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<usize, Self::Error> {
        self.do_read(address, buffer)
    }
}

#[cfg(feature = "async")]
impl Sht3xTimerAsync for MockInterface {
    async fn delay_us(&mut self, us: u32) {
        self.advance_time(us as u64);
    }
    async fn delay_ms(&mut self, ms: u32) {
        self.advance_time((ms as u64) * 1000);
    }
}

#[cfg(feature = "async")]
impl Sht3xBusAsync for MockInterface {
    type Error = MockBusError;

    async fn begin(&mut self) -> Result<(), Self::Error> {
        self.do_begin()
    }
    async fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.do_write(address, bytes)
    }
    async fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<usize, Self::Error> {
        self.do_read(address, buffer)
    }
}
