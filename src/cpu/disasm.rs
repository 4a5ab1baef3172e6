//! Range disassembler over bus memory.
//!
//! Presentation only: decoding never touches CPU state, and reads on this
//! bus are side-effect free.

use std::collections::BTreeMap;

use super::instruction::{AddrMode, LOOKUP};
use crate::bus::Bus;

/// Decode the instructions stored in `[start, end]`, keyed by the address of
/// each opcode byte.
pub fn disassemble(bus: &Bus, start: u16, end: u16) -> BTreeMap<u16, String> {
    let mut listing = BTreeMap::new();
    // Walk with a wider counter so an `end` of 0xFFFF terminates.
    let mut addr = start as u32;

    while addr <= end as u32 {
        let line_addr = addr as u16;
        let opcode = bus.read(line_addr);
        let row = &LOOKUP[opcode as usize];
        addr += 1;

        let text = match row.mode {
            AddrMode::Imp => row.mnemonic.to_string(),
            AddrMode::Imm => {
                let value = bus.read(addr as u16);
                addr += 1;
                format!("{} #${:02X}", row.mnemonic, value)
            }
            AddrMode::Zp0 => {
                let value = bus.read(addr as u16);
                addr += 1;
                format!("{} ${:02X}", row.mnemonic, value)
            }
            AddrMode::Zpx => {
                let value = bus.read(addr as u16);
                addr += 1;
                format!("{} ${:02X},X", row.mnemonic, value)
            }
            AddrMode::Zpy => {
                let value = bus.read(addr as u16);
                addr += 1;
                format!("{} ${:02X},Y", row.mnemonic, value)
            }
            AddrMode::Rel => {
                let offset = bus.read(addr as u16);
                addr += 1;
                let target = (addr as u16).wrapping_add(offset as i8 as u16);
                format!("{} ${:04X}", row.mnemonic, target)
            }
            AddrMode::Abs => {
                let value = read_operand_word(bus, addr as u16);
                addr += 2;
                format!("{} ${:04X}", row.mnemonic, value)
            }
            AddrMode::Abx => {
                let value = read_operand_word(bus, addr as u16);
                addr += 2;
                format!("{} ${:04X},X", row.mnemonic, value)
            }
            AddrMode::Aby => {
                let value = read_operand_word(bus, addr as u16);
                addr += 2;
                format!("{} ${:04X},Y", row.mnemonic, value)
            }
            AddrMode::Ind => {
                let value = read_operand_word(bus, addr as u16);
                addr += 2;
                format!("{} (${:04X})", row.mnemonic, value)
            }
            AddrMode::Izx => {
                let value = bus.read(addr as u16);
                addr += 1;
                format!("{} (${:02X},X)", row.mnemonic, value)
            }
            AddrMode::Izy => {
                let value = bus.read(addr as u16);
                addr += 1;
                format!("{} (${:02X}),Y", row.mnemonic, value)
            }
        };

        listing.insert(line_addr, text);
    }

    listing
}

fn read_operand_word(bus: &Bus, addr: u16) -> u16 {
    let lo = bus.read(addr) as u16;
    let hi = bus.read(addr.wrapping_add(1)) as u16;
    (hi << 8) | lo
}
