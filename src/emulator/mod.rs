
use std::collections::BTreeMap;
use std::error::Error;
use std::path::Path;

use crate::bus::Bus;
use crate::cpu::{disasm, Cpu, VECTOR_RESET};

/// A complete machine: CPU, bus, and the driver-side cycle counter.
#[derive(Clone, bincode::Encode, bincode::Decode)]
pub struct Emulator {
    pub cpu: Cpu,
    pub bus: Bus,
    cycles: u64,
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Emulator {
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            bus: Bus::new(),
            cycles: 0,
        }
    }

    /// Load a program into memory and wire the reset vector to it.
    pub fn load_program(&mut self, start: u16, data: &[u8]) {
        self.bus.load(start, data);
        self.bus.write_u16(VECTOR_RESET, start);
    }

    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.bus);
        self.cycles = 0;
    }

    /// Advance the machine by one clock cycle.
    pub fn tick(&mut self) {
        self.cpu.clock(&mut self.bus);
        self.cycles += 1;
    }

    /// Tick until the cycle countdown in flight is exhausted. Runs exactly
    /// one instruction from an idle CPU; drains a pending reset or interrupt
    /// sequence first if one is counting down.
    pub fn step_instruction(&mut self) {
        self.tick();
        while !self.cpu.complete() {
            self.tick();
        }
    }

    pub fn run_instructions(&mut self, count: usize) {
        for _ in 0..count {
            self.step_instruction();
        }
    }

    pub fn irq(&mut self) {
        self.cpu.irq(&mut self.bus);
    }

    pub fn nmi(&mut self) {
        self.cpu.nmi(&mut self.bus);
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn disassemble(&self, start: u16, end: u16) -> BTreeMap<u16, String> {
        disasm::disassemble(&self.bus, start, end)
    }

    pub fn save_state_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn Error>> {
        let bytes = bincode::encode_to_vec(self, bincode::config::standard())?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    pub fn load_state_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Box<dyn Error>> {
        let bytes = std::fs::read(path)?;
        let (state, _): (Emulator, usize) =
            bincode::decode_from_slice(&bytes, bincode::config::standard())?;
        *self = state;
        Ok(())
    }
}
