//! Network-on-chip data movement: async reads and writes, barriers,
//! multicast, semaphores and bank addressing. Also the named hardware
//! constants these calls take as arguments.

use tt_dsl::{Expr, KernelContext, PrimKind, Role};
use tt_ir::FunctionDecl;

intrinsics! {
    NOC_SEMAPHORE_INC = "noc_semaphore_inc"(U64, U32, U8);
    NOC_SEMAPHORE_WAIT = "noc_semaphore_wait"(U32_PTR, U32);
    NOC_SEMAPHORE_SET = "noc_semaphore_set"(U32_PTR, U32);
    NOC_SEMAPHORE_SET_MULTICAST = "noc_semaphore_set_multicast"(U32, U64, U32, BOOL, BOOL, U8);
    NOC_ASYNC_WRITE_MULTICAST = "noc_async_write_multicast"(U32, U64, U32, U32, BOOL, BOOL, U8);
    NOC_ASYNC_WRITE_BARRIER = "noc_async_write_barrier"(U8);
    NOC_ASYNC_READ_BARRIER = "noc_async_read_barrier"(U8);
    NOC_ASYNC_WRITE = "noc_async_write"(U32, U64, U32, U8);
    NOC_ASYNC_READ = "noc_async_read"(U64, U32, U32, U8);
    GET_NOC_ADDR_FROM_BANK_ID_FALSE = "get_noc_addr_from_bank_id<false>"(U32, U32, U8) -> U64;
    GET_NOC_ADDR_FROM_BANK_ID_TRUE = "get_noc_addr_from_bank_id<true>"(U32, U32, U8) -> U64;
}

/// Named `uint32_t` constants defined by the device headers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HwConst {
    Noc0,
    Noc1,
    RdCmdBuf,
    WrCmdBuf,
    WrRegCmdBuf,
    AtCmdBuf,
    Vc1,
    Vc2,
    Vc3,
    Vc4,
}

impl HwConst {
    pub const ALL: [HwConst; 10] = [
        HwConst::Noc0,
        HwConst::Noc1,
        HwConst::RdCmdBuf,
        HwConst::WrCmdBuf,
        HwConst::WrRegCmdBuf,
        HwConst::AtCmdBuf,
        HwConst::Vc1,
        HwConst::Vc2,
        HwConst::Vc3,
        HwConst::Vc4,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            HwConst::Noc0 => "NOC0",
            HwConst::Noc1 => "NOC1",
            HwConst::RdCmdBuf => "RD_CMD_BUF",
            HwConst::WrCmdBuf => "WR_CMD_BUF",
            HwConst::WrRegCmdBuf => "WR_REG_CMD_BUF",
            HwConst::AtCmdBuf => "AT_CMD_BUF",
            HwConst::Vc1 => "VC1",
            HwConst::Vc2 => "VC2",
            HwConst::Vc3 => "VC3",
            HwConst::Vc4 => "VC4",
        }
    }

    /// The constant as a `uint32_t` symbol in `ctx`.
    pub fn in_context<R: Role>(self, ctx: &KernelContext<R>) -> Expr<'_, R> {
        ctx.scalar(self.name(), PrimKind::U32)
    }
}
