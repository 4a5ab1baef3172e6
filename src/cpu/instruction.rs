//! Opcode lookup table for the MOS 6502.
//!
//! One row per opcode value. Unofficial slots carry the `???` tag; most of
//! them dispatch to a hard no-op, a handful to multi-cycle NOPs, and `0xEB`
//! to SBC (the one undocumented alias this core honors).

/// Addressing mode of an opcode.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AddrMode {
    /// Implied; the operand is the accumulator.
    Imp,
    /// Immediate; the operand byte follows the opcode.
    Imm,
    /// Zero page.
    Zp0,
    /// Zero page indexed by X, wrapping within page zero.
    Zpx,
    /// Zero page indexed by Y, wrapping within page zero.
    Zpy,
    /// Relative; signed 8-bit branch displacement.
    Rel,
    /// Absolute 16-bit address.
    Abs,
    /// Absolute indexed by X.
    Abx,
    /// Absolute indexed by Y.
    Aby,
    /// Indirect through a 16-bit pointer (JMP only).
    Ind,
    /// Indexed indirect: zero-page pointer offset by X before dereference.
    Izx,
    /// Indirect indexed: zero-page pointer dereferenced, then offset by Y.
    Izy,
}

impl AddrMode {
    /// Operand bytes following the opcode.
    pub fn operand_len(self) -> u16 {
        match self {
            AddrMode::Imp => 0,
            AddrMode::Imm
            | AddrMode::Zp0
            | AddrMode::Zpx
            | AddrMode::Zpy
            | AddrMode::Rel
            | AddrMode::Izx
            | AddrMode::Izy => 1,
            AddrMode::Abs | AddrMode::Abx | AddrMode::Aby | AddrMode::Ind => 2,
        }
    }
}

/// Dispatched operation of an opcode.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Op {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx,
    Iny, Jmp, Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp,
    Rol, Ror, Rti, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay,
    Tsx, Txa, Txs, Tya, Xxx,
}

/// One row of the opcode lookup table.
pub struct Instruction {
    /// Disassembly tag; `???` for unofficial slots.
    pub mnemonic: &'static str,
    pub mode: AddrMode,
    pub op: Op,
    /// Base cycle count before any page-crossing penalty.
    pub cycles: u8,
}

const fn row(mnemonic: &'static str, mode: AddrMode, op: Op, cycles: u8) -> Instruction {
    Instruction {
        mnemonic,
        mode,
        op,
        cycles,
    }
}

use AddrMode::*;

/// The 256-entry opcode table, indexed by opcode byte.
#[rustfmt::skip]
pub static LOOKUP: [Instruction; 256] = [
    // 0x00 - 0x0F
    row("BRK", Imm, Op::Brk, 7), row("ORA", Izx, Op::Ora, 6), row("???", Imp, Op::Xxx, 2), row("???", Imp, Op::Xxx, 8),
    row("???", Imp, Op::Nop, 3), row("ORA", Zp0, Op::Ora, 3), row("ASL", Zp0, Op::Asl, 5), row("???", Imp, Op::Xxx, 5),
    row("PHP", Imp, Op::Php, 3), row("ORA", Imm, Op::Ora, 2), row("ASL", Imp, Op::Asl, 2), row("???", Imp, Op::Xxx, 2),
    row("???", Imp, Op::Nop, 4), row("ORA", Abs, Op::Ora, 4), row("ASL", Abs, Op::Asl, 6), row("???", Imp, Op::Xxx, 6),
    // 0x10 - 0x1F
    row("BPL", Rel, Op::Bpl, 2), row("ORA", Izy, Op::Ora, 5), row("???", Imp, Op::Xxx, 2), row("???", Imp, Op::Xxx, 8),
    row("???", Imp, Op::Nop, 4), row("ORA", Zpx, Op::Ora, 4), row("ASL", Zpx, Op::Asl, 6), row("???", Imp, Op::Xxx, 6),
    row("CLC", Imp, Op::Clc, 2), row("ORA", Aby, Op::Ora, 4), row("???", Imp, Op::Nop, 2), row("???", Imp, Op::Xxx, 7),
    row("???", Imp, Op::Nop, 4), row("ORA", Abx, Op::Ora, 4), row("ASL", Abx, Op::Asl, 7), row("???", Imp, Op::Xxx, 7),
    // 0x20 - 0x2F
    row("JSR", Abs, Op::Jsr, 6), row("AND", Izx, Op::And, 6), row("???", Imp, Op::Xxx, 2), row("???", Imp, Op::Xxx, 8),
    row("BIT", Zp0, Op::Bit, 3), row("AND", Zp0, Op::And, 3), row("ROL", Zp0, Op::Rol, 5), row("???", Imp, Op::Xxx, 5),
    row("PLP", Imp, Op::Plp, 4), row("AND", Imm, Op::And, 2), row("ROL", Imp, Op::Rol, 2), row("???", Imp, Op::Xxx, 2),
    row("BIT", Abs, Op::Bit, 4), row("AND", Abs, Op::And, 4), row("ROL", Abs, Op::Rol, 6), row("???", Imp, Op::Xxx, 6),
    // 0x30 - 0x3F
    row("BMI", Rel, Op::Bmi, 2), row("AND", Izy, Op::And, 5), row("???", Imp, Op::Xxx, 2), row("???", Imp, Op::Xxx, 8),
    row("???", Imp, Op::Nop, 4), row("AND", Zpx, Op::And, 4), row("ROL", Zpx, Op::Rol, 6), row("???", Imp, Op::Xxx, 6),
    row("SEC", Imp, Op::Sec, 2), row("AND", Aby, Op::And, 4), row("???", Imp, Op::Nop, 2), row("???", Imp, Op::Xxx, 7),
    row("???", Imp, Op::Nop, 4), row("AND", Abx, Op::And, 4), row("ROL", Abx, Op::Rol, 7), row("???", Imp, Op::Xxx, 7),
    // 0x40 - 0x4F
    row("RTI", Imp, Op::Rti, 6), row("EOR", Izx, Op::Eor, 6), row("???", Imp, Op::Xxx, 2), row("???", Imp, Op::Xxx, 8),
    row("???", Imp, Op::Nop, 3), row("EOR", Zp0, Op::Eor, 3), row("LSR", Zp0, Op::Lsr, 5), row("???", Imp, Op::Xxx, 5),
    row("PHA", Imp, Op::Pha, 3), row("EOR", Imm, Op::Eor, 2), row("LSR", Imp, Op::Lsr, 2), row("???", Imp, Op::Xxx, 2),
    row("JMP", Abs, Op::Jmp, 3), row("EOR", Abs, Op::Eor, 4), row("LSR", Abs, Op::Lsr, 6), row("???", Imp, Op::Xxx, 6),
    // 0x50 - 0x5F
    row("BVC", Rel, Op::Bvc, 2), row("EOR", Izy, Op::Eor, 5), row("???", Imp, Op::Xxx, 2), row("???", Imp, Op::Xxx, 8),
    row("???", Imp, Op::Nop, 4), row("EOR", Zpx, Op::Eor, 4), row("LSR", Zpx, Op::Lsr, 6), row("???", Imp, Op::Xxx, 6),
    row("CLI", Imp, Op::Cli, 2), row("EOR", Aby, Op::Eor, 4), row("???", Imp, Op::Nop, 2), row("???", Imp, Op::Xxx, 7),
    row("???", Imp, Op::Nop, 4), row("EOR", Abx, Op::Eor, 4), row("LSR", Abx, Op::Lsr, 7), row("???", Imp, Op::Xxx, 7),
    // 0x60 - 0x6F
    row("RTS", Imp, Op::Rts, 6), row("ADC", Izx, Op::Adc, 6), row("???", Imp, Op::Xxx, 2), row("???", Imp, Op::Xxx, 8),
    row("???", Imp, Op::Nop, 3), row("ADC", Zp0, Op::Adc, 3), row("ROR", Zp0, Op::Ror, 5), row("???", Imp, Op::Xxx, 5),
    row("PLA", Imp, Op::Pla, 4), row("ADC", Imm, Op::Adc, 2), row("ROR", Imp, Op::Ror, 2), row("???", Imp, Op::Xxx, 2),
    row("JMP", Ind, Op::Jmp, 5), row("ADC", Abs, Op::Adc, 4), row("ROR", Abs, Op::Ror, 6), row("???", Imp, Op::Xxx, 6),
    // 0x70 - 0x7F
    row("BVS", Rel, Op::Bvs, 2), row("ADC", Izy, Op::Adc, 5), row("???", Imp, Op::Xxx, 2), row("???", Imp, Op::Xxx, 8),
    row("???", Imp, Op::Nop, 4), row("ADC", Zpx, Op::Adc, 4), row("ROR", Zpx, Op::Ror, 6), row("???", Imp, Op::Xxx, 6),
    row("SEI", Imp, Op::Sei, 2), row("ADC", Aby, Op::Adc, 4), row("???", Imp, Op::Nop, 2), row("???", Imp, Op::Xxx, 7),
    row("???", Imp, Op::Nop, 4), row("ADC", Abx, Op::Adc, 4), row("ROR", Abx, Op::Ror, 7), row("???", Imp, Op::Xxx, 7),
    // 0x80 - 0x8F
    row("???", Imp, Op::Nop, 2), row("STA", Izx, Op::Sta, 6), row("???", Imp, Op::Nop, 2), row("???", Imp, Op::Xxx, 6),
    row("STY", Zp0, Op::Sty, 3), row("STA", Zp0, Op::Sta, 3), row("STX", Zp0, Op::Stx, 3), row("???", Imp, Op::Xxx, 3),
    row("DEY", Imp, Op::Dey, 2), row("???", Imp, Op::Nop, 2), row("TXA", Imp, Op::Txa, 2), row("???", Imp, Op::Xxx, 2),
    row("STY", Abs, Op::Sty, 4), row("STA", Abs, Op::Sta, 4), row("STX", Abs, Op::Stx, 4), row("???", Imp, Op::Xxx, 4),
    // 0x90 - 0x9F
    row("BCC", Rel, Op::Bcc, 2), row("STA", Izy, Op::Sta, 6), row("???", Imp, Op::Xxx, 2), row("???", Imp, Op::Xxx, 6),
    row("STY", Zpx, Op::Sty, 4), row("STA", Zpx, Op::Sta, 4), row("STX", Zpy, Op::Stx, 4), row("???", Imp, Op::Xxx, 4),
    row("TYA", Imp, Op::Tya, 2), row("STA", Aby, Op::Sta, 5), row("TXS", Imp, Op::Txs, 2), row("???", Imp, Op::Xxx, 5),
    row("???", Imp, Op::Nop, 5), row("STA", Abx, Op::Sta, 5), row("???", Imp, Op::Xxx, 5), row("???", Imp, Op::Xxx, 5),
    // 0xA0 - 0xAF
    row("LDY", Imm, Op::Ldy, 2), row("LDA", Izx, Op::Lda, 6), row("LDX", Imm, Op::Ldx, 2), row("???", Imp, Op::Xxx, 6),
    row("LDY", Zp0, Op::Ldy, 3), row("LDA", Zp0, Op::Lda, 3), row("LDX", Zp0, Op::Ldx, 3), row("???", Imp, Op::Xxx, 3),
    row("TAY", Imp, Op::Tay, 2), row("LDA", Imm, Op::Lda, 2), row("TAX", Imp, Op::Tax, 2), row("???", Imp, Op::Xxx, 2),
    row("LDY", Abs, Op::Ldy, 4), row("LDA", Abs, Op::Lda, 4), row("LDX", Abs, Op::Ldx, 4), row("???", Imp, Op::Xxx, 4),
    // 0xB0 - 0xBF
    row("BCS", Rel, Op::Bcs, 2), row("LDA", Izy, Op::Lda, 5), row("???", Imp, Op::Xxx, 2), row("???", Imp, Op::Xxx, 5),
    row("LDY", Zpx, Op::Ldy, 4), row("LDA", Zpx, Op::Lda, 4), row("LDX", Zpy, Op::Ldx, 4), row("???", Imp, Op::Xxx, 4),
    row("CLV", Imp, Op::Clv, 2), row("LDA", Aby, Op::Lda, 4), row("TSX", Imp, Op::Tsx, 2), row("???", Imp, Op::Xxx, 4),
    row("LDY", Abx, Op::Ldy, 4), row("LDA", Abx, Op::Lda, 4), row("LDX", Aby, Op::Ldx, 4), row("???", Imp, Op::Xxx, 4),
    // 0xC0 - 0xCF
    row("CPY", Imm, Op::Cpy, 2), row("CMP", Izx, Op::Cmp, 6), row("???", Imp, Op::Nop, 2), row("???", Imp, Op::Xxx, 8),
    row("CPY", Zp0, Op::Cpy, 3), row("CMP", Zp0, Op::Cmp, 3), row("DEC", Zp0, Op::Dec, 5), row("???", Imp, Op::Xxx, 5),
    row("INY", Imp, Op::Iny, 2), row("CMP", Imm, Op::Cmp, 2), row("DEX", Imp, Op::Dex, 2), row("???", Imp, Op::Xxx, 2),
    row("CPY", Abs, Op::Cpy, 4), row("CMP", Abs, Op::Cmp, 4), row("DEC", Abs, Op::Dec, 6), row("???", Imp, Op::Xxx, 6),
    // 0xD0 - 0xDF
    row("BNE", Rel, Op::Bne, 2), row("CMP", Izy, Op::Cmp, 5), row("???", Imp, Op::Xxx, 2), row("???", Imp, Op::Xxx, 8),
    row("???", Imp, Op::Nop, 4), row("CMP", Zpx, Op::Cmp, 4), row("DEC", Zpx, Op::Dec, 6), row("???", Imp, Op::Xxx, 6),
    row("CLD", Imp, Op::Cld, 2), row("CMP", Aby, Op::Cmp, 4), row("NOP", Imp, Op::Nop, 2), row("???", Imp, Op::Xxx, 7),
    row("???", Imp, Op::Nop, 4), row("CMP", Abx, Op::Cmp, 4), row("DEC", Abx, Op::Dec, 7), row("???", Imp, Op::Xxx, 7),
    // 0xE0 - 0xEF
    row("CPX", Imm, Op::Cpx, 2), row("SBC", Izx, Op::Sbc, 6), row("???", Imp, Op::Nop, 2), row("???", Imp, Op::Xxx, 8),
    row("CPX", Zp0, Op::Cpx, 3), row("SBC", Zp0, Op::Sbc, 3), row("INC", Zp0, Op::Inc, 5), row("???", Imp, Op::Xxx, 5),
    row("INX", Imp, Op::Inx, 2), row("SBC", Imm, Op::Sbc, 2), row("NOP", Imp, Op::Nop, 2), row("???", Imp, Op::Sbc, 2),
    row("CPX", Abs, Op::Cpx, 4), row("SBC", Abs, Op::Sbc, 4), row("INC", Abs, Op::Inc, 6), row("???", Imp, Op::Xxx, 6),
    // 0xF0 - 0xFF
    row("BEQ", Rel, Op::Beq, 2), row("SBC", Izy, Op::Sbc, 5), row("???", Imp, Op::Xxx, 2), row("???", Imp, Op::Xxx, 8),
    row("???", Imp, Op::Nop, 4), row("SBC", Zpx, Op::Sbc, 4), row("INC", Zpx, Op::Inc, 6), row("???", Imp, Op::Xxx, 6),
    row("SED", Imp, Op::Sed, 2), row("SBC", Aby, Op::Sbc, 4), row("NOP", Imp, Op::Nop, 2), row("???", Imp, Op::Xxx, 7),
    row("???", Imp, Op::Nop, 4), row("SBC", Abx, Op::Sbc, 4), row("INC", Abx, Op::Inc, 7), row("???", Imp, Op::Xxx, 7),
];
