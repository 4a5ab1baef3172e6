pub mod disasm;
mod instruction;


pub use instruction::{AddrMode, Instruction, Op, LOOKUP};

use crate::bus::Bus;

pub const FLAG_CARRY: u8 = 0b0000_0001;
pub const FLAG_ZERO: u8 = 0b0000_0010;
pub const FLAG_INTERRUPT_DISABLE: u8 = 0b0000_0100;
/// Storable but never consulted by ADC/SBC, matching the NES 2A03.
pub const FLAG_DECIMAL: u8 = 0b0000_1000;
pub const FLAG_BREAK: u8 = 0b0001_0000;
/// Hardwired high; forced back on whenever the CPU finishes a step.
pub const FLAG_UNUSED: u8 = 0b0010_0000;
pub const FLAG_OVERFLOW: u8 = 0b0100_0000;
pub const FLAG_NEGATIVE: u8 = 0b1000_0000;

pub const VECTOR_NMI: u16 = 0xFFFA;
pub const VECTOR_RESET: u16 = 0xFFFC;
pub const VECTOR_IRQ: u16 = 0xFFFE;

const STACK_BASE: u16 = 0x0100;
const STACK_RESET: u8 = 0xFD;

const RESET_CYCLES: u8 = 8;
const IRQ_CYCLES: u8 = 7;
const NMI_CYCLES: u8 = 8;

/// MOS 6502 CPU core.
///
/// The CPU holds no bus reference; every external signal takes the bus it
/// should drive. One call to [`Cpu::clock`] consumes one cycle: when the
/// current instruction's countdown is exhausted, the next opcode is fetched,
/// decoded through [`LOOKUP`], and executed in full, and the countdown is
/// reloaded with its cycle cost.
#[derive(Clone, bincode::Encode, bincode::Decode)]
pub struct Cpu {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: u8,

    // Working state for the instruction in flight.
    fetched: u8,
    addr_abs: u16,
    addr_rel: u16,
    opcode: u8,
    cycles: u8,
    clock_count: u64,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: STACK_RESET,
            pc: 0,
            status: FLAG_UNUSED,
            fetched: 0,
            addr_abs: 0,
            addr_rel: 0,
            opcode: 0,
            cycles: 0,
            clock_count: 0,
        }
    }

    /// Advance the CPU by one clock cycle.
    ///
    /// The instruction starting on a tick runs to completion immediately;
    /// the remaining ticks of its cycle cost only count down. A page-crossing
    /// penalty applies when both the addressing mode and the operation ask
    /// for it.
    pub fn clock(&mut self, bus: &mut Bus) {
        if self.cycles == 0 {
            #[cfg(feature = "trace")]
            let instruction_pc = self.pc;

            self.opcode = bus.read(self.pc);
            self.set_flag(FLAG_UNUSED, true);
            self.pc = self.pc.wrapping_add(1);

            let row = &LOOKUP[self.opcode as usize];
            self.cycles = row.cycles;
            let extra_mode = self.run_address_mode(bus, row.mode);
            let extra_op = self.run_operation(bus, row.op);
            self.cycles += extra_mode & extra_op;
            self.set_flag(FLAG_UNUSED, true);

            #[cfg(feature = "trace")]
            self.trace(instruction_pc);
        }

        self.clock_count = self.clock_count.wrapping_add(1);
        self.cycles -= 1;
    }

    /// Force the CPU into its post-reset state: registers cleared, stack
    /// pointer at 0xFD, PC loaded from the reset vector. The sequence
    /// occupies eight cycles before the first instruction runs.
    pub fn reset(&mut self, bus: &mut Bus) {
        self.pc = bus.read_u16(VECTOR_RESET);

        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = STACK_RESET;
        self.status = FLAG_UNUSED;

        self.fetched = 0;
        self.addr_abs = 0;
        self.addr_rel = 0;
        self.opcode = 0;

        self.cycles = RESET_CYCLES;
    }

    /// Deliver a maskable interrupt request. Ignored while the I flag is set.
    pub fn irq(&mut self, bus: &mut Bus) {
        if !self.get_flag(FLAG_INTERRUPT_DISABLE) {
            self.service_interrupt(bus, VECTOR_IRQ, IRQ_CYCLES);
        }
    }

    /// Deliver a non-maskable interrupt.
    pub fn nmi(&mut self, bus: &mut Bus) {
        self.service_interrupt(bus, VECTOR_NMI, NMI_CYCLES);
    }

    /// True when the current instruction has consumed all of its cycles.
    pub fn complete(&self) -> bool {
        self.cycles == 0
    }

    pub fn flag(&self, flag: u8) -> bool {
        self.get_flag(flag)
    }

    /// Cycles left on the instruction in flight.
    pub fn cycles(&self) -> u8 {
        self.cycles
    }

    /// Free-running total of clock ticks served.
    pub fn clock_count(&self) -> u64 {
        self.clock_count
    }

    fn service_interrupt(&mut self, bus: &mut Bus, vector: u16, cycles: u8) {
        self.push_byte(bus, (self.pc >> 8) as u8);
        self.push_byte(bus, self.pc as u8);

        self.set_flag(FLAG_BREAK, false);
        self.set_flag(FLAG_UNUSED, true);
        self.set_flag(FLAG_INTERRUPT_DISABLE, true);
        self.push_byte(bus, self.status);

        self.addr_abs = vector;
        self.pc = bus.read_u16(vector);

        self.cycles = cycles;
    }

    #[cfg(feature = "trace")]
    fn trace(&self, pc: u16) {
        eprintln!(
            "{:04X}  {:02X}  {}  A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
            pc,
            self.opcode,
            LOOKUP[self.opcode as usize].mnemonic,
            self.a,
            self.x,
            self.y,
            self.status,
            self.sp,
            self.clock_count,
        );
    }

    ////////////////////////////////////////////////////////////////////////
    // Addressing modes
    ////////////////////////////////////////////////////////////////////////

    fn run_address_mode(&mut self, bus: &mut Bus, mode: AddrMode) -> u8 {
        match mode {
            AddrMode::Imp => self.imp(),
            AddrMode::Imm => self.imm(),
            AddrMode::Zp0 => self.zp0(bus),
            AddrMode::Zpx => self.zpx(bus),
            AddrMode::Zpy => self.zpy(bus),
            AddrMode::Rel => self.rel(bus),
            AddrMode::Abs => self.abs(bus),
            AddrMode::Abx => self.abx(bus),
            AddrMode::Aby => self.aby(bus),
            AddrMode::Ind => self.ind(bus),
            AddrMode::Izx => self.izx(bus),
            AddrMode::Izy => self.izy(bus),
        }
    }

    fn imp(&mut self) -> u8 {
        self.fetched = self.a;
        0
    }

    fn imm(&mut self) -> u8 {
        self.addr_abs = self.pc;
        self.pc = self.pc.wrapping_add(1);
        0
    }

    fn zp0(&mut self, bus: &mut Bus) -> u8 {
        self.addr_abs = self.fetch_byte(bus) as u16;
        0
    }

    fn zpx(&mut self, bus: &mut Bus) -> u8 {
        self.addr_abs = self.fetch_byte(bus).wrapping_add(self.x) as u16;
        0
    }

    fn zpy(&mut self, bus: &mut Bus) -> u8 {
        self.addr_abs = self.fetch_byte(bus).wrapping_add(self.y) as u16;
        0
    }

    fn rel(&mut self, bus: &mut Bus) -> u8 {
        // Sign-extend the displacement so plain 16-bit addition reaches
        // backward targets.
        self.addr_rel = self.fetch_byte(bus) as i8 as u16;
        0
    }

    fn abs(&mut self, bus: &mut Bus) -> u8 {
        self.addr_abs = self.fetch_word(bus);
        0
    }

    fn abx(&mut self, bus: &mut Bus) -> u8 {
        let base = self.fetch_word(bus);
        self.addr_abs = base.wrapping_add(self.x as u16);
        Cpu::page_crossed(base, self.addr_abs) as u8
    }

    fn aby(&mut self, bus: &mut Bus) -> u8 {
        let base = self.fetch_word(bus);
        self.addr_abs = base.wrapping_add(self.y as u16);
        Cpu::page_crossed(base, self.addr_abs) as u8
    }

    fn ind(&mut self, bus: &mut Bus) -> u8 {
        let ptr = self.fetch_word(bus);
        let lo = bus.read(ptr);
        // Hardware bug: a pointer ending in 0xFF wraps within its own page
        // instead of carrying into the next one.
        let hi = if ptr & 0x00FF == 0x00FF {
            bus.read(ptr & 0xFF00)
        } else {
            bus.read(ptr.wrapping_add(1))
        };
        self.addr_abs = ((hi as u16) << 8) | lo as u16;
        0
    }

    fn izx(&mut self, bus: &mut Bus) -> u8 {
        let base = self.fetch_byte(bus).wrapping_add(self.x);
        self.addr_abs = Cpu::read_zero_page_word(bus, base);
        0
    }

    fn izy(&mut self, bus: &mut Bus) -> u8 {
        let ptr = self.fetch_byte(bus);
        let base = Cpu::read_zero_page_word(bus, ptr);
        self.addr_abs = base.wrapping_add(self.y as u16);
        Cpu::page_crossed(base, self.addr_abs) as u8
    }

    ////////////////////////////////////////////////////////////////////////
    // Operations
    ////////////////////////////////////////////////////////////////////////

    fn run_operation(&mut self, bus: &mut Bus, op: Op) -> u8 {
        match op {
            Op::Adc => self.adc(bus),
            Op::And => self.and(bus),
            Op::Asl => self.asl(bus),
            Op::Bcc => self.bcc(),
            Op::Bcs => self.bcs(),
            Op::Beq => self.beq(),
            Op::Bit => self.bit(bus),
            Op::Bmi => self.bmi(),
            Op::Bne => self.bne(),
            Op::Bpl => self.bpl(),
            Op::Brk => self.brk(bus),
            Op::Bvc => self.bvc(),
            Op::Bvs => self.bvs(),
            Op::Clc => self.clc(),
            Op::Cld => self.cld(),
            Op::Cli => self.cli(),
            Op::Clv => self.clv(),
            Op::Cmp => self.cmp(bus),
            Op::Cpx => self.cpx(bus),
            Op::Cpy => self.cpy(bus),
            Op::Dec => self.dec(bus),
            Op::Dex => self.dex(),
            Op::Dey => self.dey(),
            Op::Eor => self.eor(bus),
            Op::Inc => self.inc(bus),
            Op::Inx => self.inx(),
            Op::Iny => self.iny(),
            Op::Jmp => self.jmp(),
            Op::Jsr => self.jsr(bus),
            Op::Lda => self.lda(bus),
            Op::Ldx => self.ldx(bus),
            Op::Ldy => self.ldy(bus),
            Op::Lsr => self.lsr(bus),
            Op::Nop => self.nop(),
            Op::Ora => self.ora(bus),
            Op::Pha => self.pha(bus),
            Op::Php => self.php(bus),
            Op::Pla => self.pla(bus),
            Op::Plp => self.plp(bus),
            Op::Rol => self.rol(bus),
            Op::Ror => self.ror(bus),
            Op::Rti => self.rti(bus),
            Op::Rts => self.rts(bus),
            Op::Sbc => self.sbc(bus),
            Op::Sec => self.sec(),
            Op::Sed => self.sed(),
            Op::Sei => self.sei(),
            Op::Sta => self.sta(bus),
            Op::Stx => self.stx(bus),
            Op::Sty => self.sty(bus),
            Op::Tax => self.tax(),
            Op::Tay => self.tay(),
            Op::Tsx => self.tsx(),
            Op::Txa => self.txa(),
            Op::Txs => self.txs(),
            Op::Tya => self.tya(),
            Op::Xxx => self.xxx(),
        }
    }

    fn adc(&mut self, bus: &mut Bus) -> u8 {
        let value = self.fetch(bus);
        self.add_to_accumulator(value);
        1
    }

    // Subtraction is addition of the one's complement; the borrow falls out
    // of the carry.
    fn sbc(&mut self, bus: &mut Bus) -> u8 {
        let value = self.fetch(bus) ^ 0xFF;
        self.add_to_accumulator(value);
        1
    }

    fn and(&mut self, bus: &mut Bus) -> u8 {
        self.a &= self.fetch(bus);
        self.update_zero_and_negative(self.a);
        1
    }

    fn ora(&mut self, bus: &mut Bus) -> u8 {
        self.a |= self.fetch(bus);
        self.update_zero_and_negative(self.a);
        1
    }

    fn eor(&mut self, bus: &mut Bus) -> u8 {
        self.a ^= self.fetch(bus);
        self.update_zero_and_negative(self.a);
        1
    }

    fn asl(&mut self, bus: &mut Bus) -> u8 {
        let value = self.fetch(bus);
        let result = value.wrapping_shl(1);
        self.set_flag(FLAG_CARRY, value & 0x80 != 0);
        self.update_zero_and_negative(result);
        self.store_shift_result(bus, result);
        0
    }

    fn lsr(&mut self, bus: &mut Bus) -> u8 {
        let value = self.fetch(bus);
        let result = value >> 1;
        self.set_flag(FLAG_CARRY, value & 0x01 != 0);
        self.update_zero_and_negative(result);
        self.store_shift_result(bus, result);
        0
    }

    fn rol(&mut self, bus: &mut Bus) -> u8 {
        let value = self.fetch(bus);
        let carry_in = if self.get_flag(FLAG_CARRY) { 1 } else { 0 };
        let result = (value << 1) | carry_in;
        self.set_flag(FLAG_CARRY, value & 0x80 != 0);
        self.update_zero_and_negative(result);
        self.store_shift_result(bus, result);
        0
    }

    fn ror(&mut self, bus: &mut Bus) -> u8 {
        let value = self.fetch(bus);
        let carry_in = if self.get_flag(FLAG_CARRY) { 1 } else { 0 };
        let result = (value >> 1) | (carry_in << 7);
        self.set_flag(FLAG_CARRY, value & 0x01 != 0);
        self.update_zero_and_negative(result);
        self.store_shift_result(bus, result);
        0
    }

    fn bit(&mut self, bus: &mut Bus) -> u8 {
        let value = self.fetch(bus);
        self.set_flag(FLAG_ZERO, self.a & value == 0);
        self.set_flag(FLAG_NEGATIVE, value & 0x80 != 0);
        self.set_flag(FLAG_OVERFLOW, value & 0x40 != 0);
        0
    }

    fn cmp(&mut self, bus: &mut Bus) -> u8 {
        let value = self.fetch(bus);
        self.compare(value, self.a);
        1
    }

    fn cpx(&mut self, bus: &mut Bus) -> u8 {
        let value = self.fetch(bus);
        self.compare(value, self.x);
        0
    }

    fn cpy(&mut self, bus: &mut Bus) -> u8 {
        let value = self.fetch(bus);
        self.compare(value, self.y);
        0
    }

    fn dec(&mut self, bus: &mut Bus) -> u8 {
        let value = self.fetch(bus).wrapping_sub(1);
        bus.write(self.addr_abs, value);
        self.update_zero_and_negative(value);
        0
    }

    fn inc(&mut self, bus: &mut Bus) -> u8 {
        let value = self.fetch(bus).wrapping_add(1);
        bus.write(self.addr_abs, value);
        self.update_zero_and_negative(value);
        0
    }

    fn dex(&mut self) -> u8 {
        self.x = self.x.wrapping_sub(1);
        self.update_zero_and_negative(self.x);
        0
    }

    fn dey(&mut self) -> u8 {
        self.y = self.y.wrapping_sub(1);
        self.update_zero_and_negative(self.y);
        0
    }

    fn inx(&mut self) -> u8 {
        self.x = self.x.wrapping_add(1);
        self.update_zero_and_negative(self.x);
        0
    }

    fn iny(&mut self) -> u8 {
        self.y = self.y.wrapping_add(1);
        self.update_zero_and_negative(self.y);
        0
    }

    fn lda(&mut self, bus: &mut Bus) -> u8 {
        self.a = self.fetch(bus);
        self.update_zero_and_negative(self.a);
        1
    }

    fn ldx(&mut self, bus: &mut Bus) -> u8 {
        self.x = self.fetch(bus);
        self.update_zero_and_negative(self.x);
        1
    }

    fn ldy(&mut self, bus: &mut Bus) -> u8 {
        self.y = self.fetch(bus);
        self.update_zero_and_negative(self.y);
        1
    }

    fn sta(&mut self, bus: &mut Bus) -> u8 {
        bus.write(self.addr_abs, self.a);
        0
    }

    fn stx(&mut self, bus: &mut Bus) -> u8 {
        bus.write(self.addr_abs, self.x);
        0
    }

    fn sty(&mut self, bus: &mut Bus) -> u8 {
        bus.write(self.addr_abs, self.y);
        0
    }

    fn tax(&mut self) -> u8 {
        self.x = self.a;
        self.update_zero_and_negative(self.x);
        0
    }

    fn tay(&mut self) -> u8 {
        self.y = self.a;
        self.update_zero_and_negative(self.y);
        0
    }

    fn tsx(&mut self) -> u8 {
        self.x = self.sp;
        self.update_zero_and_negative(self.x);
        0
    }

    fn txa(&mut self) -> u8 {
        self.a = self.x;
        self.update_zero_and_negative(self.a);
        0
    }

    fn txs(&mut self) -> u8 {
        self.sp = self.x;
        0
    }

    fn tya(&mut self) -> u8 {
        self.a = self.y;
        self.update_zero_and_negative(self.a);
        0
    }

    fn clc(&mut self) -> u8 {
        self.set_flag(FLAG_CARRY, false);
        0
    }

    fn sec(&mut self) -> u8 {
        self.set_flag(FLAG_CARRY, true);
        0
    }

    fn cld(&mut self) -> u8 {
        self.set_flag(FLAG_DECIMAL, false);
        0
    }

    fn sed(&mut self) -> u8 {
        self.set_flag(FLAG_DECIMAL, true);
        0
    }

    fn cli(&mut self) -> u8 {
        self.set_flag(FLAG_INTERRUPT_DISABLE, false);
        0
    }

    fn sei(&mut self) -> u8 {
        self.set_flag(FLAG_INTERRUPT_DISABLE, true);
        0
    }

    fn clv(&mut self) -> u8 {
        self.set_flag(FLAG_OVERFLOW, false);
        0
    }

    fn pha(&mut self, bus: &mut Bus) -> u8 {
        self.push_byte(bus, self.a);
        0
    }

    // The pushed copy carries B and U set; the live register drops both.
    fn php(&mut self, bus: &mut Bus) -> u8 {
        self.push_byte(bus, self.status | FLAG_BREAK | FLAG_UNUSED);
        self.set_flag(FLAG_BREAK, false);
        self.set_flag(FLAG_UNUSED, false);
        0
    }

    fn pla(&mut self, bus: &mut Bus) -> u8 {
        self.a = self.pop_byte(bus);
        self.update_zero_and_negative(self.a);
        0
    }

    fn plp(&mut self, bus: &mut Bus) -> u8 {
        self.status = self.pop_byte(bus);
        self.set_flag(FLAG_UNUSED, true);
        0
    }

    fn bcc(&mut self) -> u8 {
        self.branch(!self.get_flag(FLAG_CARRY))
    }

    fn bcs(&mut self) -> u8 {
        self.branch(self.get_flag(FLAG_CARRY))
    }

    fn beq(&mut self) -> u8 {
        self.branch(self.get_flag(FLAG_ZERO))
    }

    fn bne(&mut self) -> u8 {
        self.branch(!self.get_flag(FLAG_ZERO))
    }

    fn bmi(&mut self) -> u8 {
        self.branch(self.get_flag(FLAG_NEGATIVE))
    }

    fn bpl(&mut self) -> u8 {
        self.branch(!self.get_flag(FLAG_NEGATIVE))
    }

    fn bvs(&mut self) -> u8 {
        self.branch(self.get_flag(FLAG_OVERFLOW))
    }

    fn bvc(&mut self) -> u8 {
        self.branch(!self.get_flag(FLAG_OVERFLOW))
    }

    fn jmp(&mut self) -> u8 {
        self.pc = self.addr_abs;
        0
    }

    fn jsr(&mut self, bus: &mut Bus) -> u8 {
        let return_addr = self.pc.wrapping_sub(1);
        self.push_byte(bus, (return_addr >> 8) as u8);
        self.push_byte(bus, return_addr as u8);
        self.pc = self.addr_abs;
        0
    }

    fn rts(&mut self, bus: &mut Bus) -> u8 {
        let lo = self.pop_byte(bus) as u16;
        let hi = self.pop_byte(bus) as u16;
        self.pc = ((hi << 8) | lo).wrapping_add(1);
        0
    }

    fn rti(&mut self, bus: &mut Bus) -> u8 {
        self.status = self.pop_byte(bus);
        self.status &= !FLAG_BREAK;
        self.status &= !FLAG_UNUSED;
        let lo = self.pop_byte(bus) as u16;
        let hi = self.pop_byte(bus) as u16;
        self.pc = (hi << 8) | lo;
        0
    }

    // BRK pushes the address past its padding byte and stacks the status
    // with B set, then vectors through the IRQ slot.
    fn brk(&mut self, bus: &mut Bus) -> u8 {
        self.pc = self.pc.wrapping_add(1);

        self.set_flag(FLAG_INTERRUPT_DISABLE, true);
        self.push_byte(bus, (self.pc >> 8) as u8);
        self.push_byte(bus, self.pc as u8);

        self.set_flag(FLAG_BREAK, true);
        self.push_byte(bus, self.status);
        self.set_flag(FLAG_BREAK, false);

        self.pc = bus.read_u16(VECTOR_IRQ);
        0
    }

    fn nop(&mut self) -> u8 {
        // Only these unofficial NOPs are page-cross penalty candidates.
        match self.opcode {
            0x1C | 0x3C | 0x5C | 0x7C | 0xDC | 0xFC => 1,
            _ => 0,
        }
    }

    fn xxx(&mut self) -> u8 {
        0
    }

    ////////////////////////////////////////////////////////////////////////
    // Helpers
    ////////////////////////////////////////////////////////////////////////

    /// Latch the operand for the instruction in flight: implied opcodes
    /// already carry the accumulator, everything else reads the effective
    /// address.
    fn fetch(&mut self, bus: &mut Bus) -> u8 {
        if LOOKUP[self.opcode as usize].mode != AddrMode::Imp {
            self.fetched = bus.read(self.addr_abs);
        }
        self.fetched
    }

    fn add_to_accumulator(&mut self, value: u8) {
        let carry = if self.get_flag(FLAG_CARRY) { 1u16 } else { 0 };
        let sum = self.a as u16 + value as u16 + carry;
        let result = sum as u8;

        self.set_flag(FLAG_CARRY, sum & 0xFF00 != 0);
        self.set_flag(
            FLAG_OVERFLOW,
            (!(self.a ^ value) & (self.a ^ result) & 0x80) != 0,
        );
        self.a = result;
        self.update_zero_and_negative(self.a);
    }

    fn compare(&mut self, value: u8, register: u8) {
        let result = register.wrapping_sub(value);
        self.set_flag(FLAG_CARRY, register >= value);
        self.update_zero_and_negative(result);
    }

    /// Taken branches cost one extra cycle, two when the target sits in a
    /// different page than the instruction that follows the branch.
    fn branch(&mut self, condition: bool) -> u8 {
        if condition {
            self.cycles += 1;
            self.addr_abs = self.pc.wrapping_add(self.addr_rel);
            if Cpu::page_crossed(self.addr_abs, self.pc) {
                self.cycles += 1;
            }
            self.pc = self.addr_abs;
        }
        0
    }

    /// Shift and rotate results go back to the accumulator for the implied
    /// form, to memory for everything else.
    fn store_shift_result(&mut self, bus: &mut Bus, value: u8) {
        if LOOKUP[self.opcode as usize].mode == AddrMode::Imp {
            self.a = value;
        } else {
            bus.write(self.addr_abs, value);
        }
    }

    fn fetch_byte(&mut self, bus: &mut Bus) -> u8 {
        let value = bus.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    fn fetch_word(&mut self, bus: &mut Bus) -> u16 {
        let lo = self.fetch_byte(bus) as u16;
        let hi = self.fetch_byte(bus) as u16;
        (hi << 8) | lo
    }

    fn read_zero_page_word(bus: &mut Bus, addr: u8) -> u16 {
        let lo = bus.read(addr as u16) as u16;
        let hi = bus.read(addr.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    fn push_byte(&mut self, bus: &mut Bus, value: u8) {
        bus.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    fn pop_byte(&mut self, bus: &mut Bus) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        bus.read(STACK_BASE | self.sp as u16)
    }

    fn update_zero_and_negative(&mut self, value: u8) {
        self.set_flag(FLAG_ZERO, value == 0);
        self.set_flag(FLAG_NEGATIVE, value & 0x80 != 0);
    }

    fn set_flag(&mut self, flag: u8, value: bool) {
        if value {
            self.status |= flag;
        } else {
            self.status &= !flag;
        }
    }

    fn get_flag(&self, flag: u8) -> bool {
        self.status & flag != 0
    }

    fn page_crossed(a: u16, b: u16) -> bool {
        (a & 0xFF00) != (b & 0xFF00)
    }
}
