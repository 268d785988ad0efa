//! Sample kernels bundled with the driver.

use std::path::PathBuf;

use tt_api::{args as rt_args, circular_buffer, compute, debug, noc, pack, HwConst};
use tt_cache::{CacheError, KernelCache};
use tt_dsl::{
    args, stmts, Brisc, CodegenError, Crisc, Diagnostic, FunctionDecl, Kernel, KernelContext,
    Ncrisc, Placeholder, PrimKind, Role, SlotShape, ValueType,
};

const GET_TILE_SIZE: FunctionDecl = FunctionDecl::builtin(
    "get_tile_size",
    &[ValueType::scalar(PrimKind::U32)],
    Some(ValueType::scalar(PrimKind::U32)),
);

const GET_WRITE_PTR: FunctionDecl = FunctionDecl::builtin(
    "get_write_ptr",
    &[ValueType::scalar(PrimKind::U32)],
    Some(ValueType::scalar(PrimKind::U32)),
);

const fn slot(kind: PrimKind, shape: SlotShape, ordinal: u8) -> Placeholder {
    match Placeholder::new(kind, shape, ordinal) {
        Some(p) => p,
        None => panic!("placeholder ordinal out of range"),
    }
}

const TILE_DATA: Placeholder = slot(PrimKind::F32, SlotShape::Array, 0);
const TILE_LEN: Placeholder = slot(PrimKind::U32, SlotShape::Scalar, 1);

/// A rendered kernel of any role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnyKernel {
    Brisc(Kernel<Brisc>),
    Ncrisc(Kernel<Ncrisc>),
    Crisc(Kernel<Crisc>),
}

macro_rules! with_kernel {
    ($any:expr, $k:ident => $body:expr) => {
        match $any {
            AnyKernel::Brisc($k) => $body,
            AnyKernel::Ncrisc($k) => $body,
            AnyKernel::Crisc($k) => $body,
        }
    };
}

impl AnyKernel {
    pub fn source(&self) -> &str {
        with_kernel!(self, k => k.source())
    }

    pub fn provenance(&self) -> &str {
        with_kernel!(self, k => k.provenance())
    }

    pub fn role(&self) -> &'static str {
        with_kernel!(self, k => k.role())
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        with_kernel!(self, k => k.diagnostics())
    }

    /// Store the kernel in `cache`; returns whether it was new and the
    /// path of the cached file.
    pub fn persist(&self, cache: &KernelCache) -> Result<(bool, Option<PathBuf>), CacheError> {
        with_kernel!(self, k => {
            let added = cache.put(k)?;
            Ok((added, cache.get(k)?))
        })
    }
}

impl From<Kernel<Brisc>> for AnyKernel {
    fn from(k: Kernel<Brisc>) -> Self {
        AnyKernel::Brisc(k)
    }
}

impl From<Kernel<Ncrisc>> for AnyKernel {
    fn from(k: Kernel<Ncrisc>) -> Self {
        AnyKernel::Ncrisc(k)
    }
}

impl From<Kernel<Crisc>> for AnyKernel {
    fn from(k: Kernel<Crisc>) -> Self {
        AnyKernel::Crisc(k)
    }
}

/// A named kernel the driver can build.
pub struct Sample {
    pub name: &'static str,
    pub role: &'static str,
    pub summary: &'static str,
    build: fn() -> Result<AnyKernel, CodegenError>,
}

impl Sample {
    pub fn build(&self) -> Result<AnyKernel, CodegenError> {
        (self.build)()
    }
}

pub static SAMPLES: &[Sample] = &[
    Sample {
        name: "hello_world",
        role: Crisc::NAME,
        summary: "print the core's first runtime argument",
        build: hello_world,
    },
    Sample {
        name: "reader_unary",
        role: Brisc::NAME,
        summary: "stream tiles from a DRAM bank into a circular buffer",
        build: reader_unary,
    },
    Sample {
        name: "loopback",
        role: Ncrisc::NAME,
        summary: "copy a DRAM buffer through L1 and back",
        build: loopback,
    },
    Sample {
        name: "eltwise_add",
        role: Crisc::NAME,
        summary: "add two tile streams on the compute core",
        build: eltwise_add,
    },
    Sample {
        name: "branches",
        role: Brisc::NAME,
        summary: "if/switch dispatch on a runtime mode and a helper function",
        build: branches,
    },
];

pub fn sample(name: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|s| s.name == name)
}

pub fn hello_world() -> Result<AnyKernel, CodegenError> {
    let ctx = KernelContext::<Crisc>::new();
    let core = ctx.scalar("core", PrimKind::U32);

    Kernel::new(
        &ctx,
        stmts![
            ctx.include_local("debug/dprint.h"),
            ctx.kernel_main(stmts![
                ctx.comment("Hello!"),
                core.declare().assign(ctx.call(&rt_args::GET_ARG_VAL, args![0])),
                ctx.call(&debug::DPRINT, args![core]),
            ]),
        ],
    )
    .map(AnyKernel::from)
}

pub fn reader_unary() -> Result<AnyKernel, CodegenError> {
    let ctx = KernelContext::<Brisc>::new();
    let src_addr = ctx.scalar("src_addr", PrimKind::U32);
    let bank_id = ctx.scalar("bank_id", PrimKind::U32);
    let num_tiles = ctx.scalar("num_tiles", PrimKind::U32);
    let cb_id_in0 = ctx.scalar("cb_id_in0", PrimKind::U32);
    let ublock_size_tiles = ctx.scalar("ublock_size_tiles", PrimKind::U32);
    let ublock_size_bytes = ctx.scalar("ublock_size_bytes", PrimKind::U32);
    let i = ctx.scalar("i", PrimKind::U32);
    let src_noc_addr = ctx.scalar("src_noc_addr", PrimKind::U64);
    let l1_write_addr = ctx.scalar("l1_write_addr", PrimKind::U32);

    Kernel::new(
        &ctx,
        stmts![
            ctx.include_system("cstdint"),
            ctx.include_local("dataflow_api.h"),
            ctx.kernel_main(stmts![
                src_addr.declare().assign(ctx.call(&rt_args::GET_ARG_VAL, args![0])),
                bank_id.declare().assign(ctx.call(&rt_args::GET_ARG_VAL, args![1])),
                num_tiles.declare().assign(ctx.call(&rt_args::GET_ARG_VAL, args![2])),
                cb_id_in0.declare().assign(0u32),
                ublock_size_tiles.declare().assign(1u32),
                ublock_size_bytes
                    .declare()
                    .assign(ctx.call(&GET_TILE_SIZE, args![cb_id_in0]) * ublock_size_tiles),
                src_noc_addr.declare(),
                l1_write_addr.declare().assign(0u32),
                ctx.for_(
                    i.declare().assign(0u32),
                    i.lt(num_tiles),
                    i.assign(i + ublock_size_tiles),
                    stmts![
                        src_noc_addr.assign(ctx.call(
                            &noc::GET_NOC_ADDR_FROM_BANK_ID_TRUE,
                            args![bank_id, src_addr]
                        )),
                        ctx.call(
                            &circular_buffer::CB_RESERVE_BACK,
                            args![cb_id_in0, ublock_size_tiles]
                        ),
                        l1_write_addr.assign(ctx.call(&GET_WRITE_PTR, args![cb_id_in0])),
                        ctx.call(
                            &noc::NOC_ASYNC_READ,
                            args![src_noc_addr, l1_write_addr, ublock_size_bytes]
                        ),
                        ctx.call(&noc::NOC_ASYNC_READ_BARRIER, args![]),
                        ctx.call(
                            &circular_buffer::CB_PUSH_BACK,
                            args![cb_id_in0, ublock_size_tiles]
                        ),
                        src_addr.assign(src_addr + ublock_size_bytes),
                    ],
                ),
            ]),
        ],
    )
    .map(AnyKernel::from)
}

pub fn loopback() -> Result<AnyKernel, CodegenError> {
    let ctx = KernelContext::<Ncrisc>::new();
    let l1_buffer_addr = ctx.scalar("l1_buffer_addr", PrimKind::I32);
    let src_addr = ctx.scalar("dram_buffer_src_addr", PrimKind::I32);
    let src_bank = ctx.scalar("dram_buffer_src_bank", PrimKind::I32);
    let dst_addr = ctx.scalar("dram_buffer_dst_addr", PrimKind::I32);
    let dst_bank = ctx.scalar("dram_buffer_dst_bank", PrimKind::I32);
    let size = ctx.scalar("dram_buffer_size", PrimKind::I32);
    let src_noc_addr = ctx.scalar("dram_buffer_src_noc_addr", PrimKind::I64);
    let dst_noc_addr = ctx.scalar("dram_buffer_dst_noc_addr", PrimKind::I64);
    let noc0 = HwConst::Noc0.in_context(&ctx);

    Kernel::new(
        &ctx,
        stmts![
            ctx.include_local("dataflow_api.h"),
            ctx.kernel_main(stmts![
                l1_buffer_addr.declare().assign(ctx.call(&rt_args::GET_ARG_VAL, args![0])),
                src_addr.declare().assign(ctx.call(&rt_args::GET_ARG_VAL, args![1])),
                src_bank.declare().assign(ctx.call(&rt_args::GET_ARG_VAL, args![2])),
                dst_addr.declare().assign(ctx.call(&rt_args::GET_ARG_VAL, args![3])),
                dst_bank.declare().assign(ctx.call(&rt_args::GET_ARG_VAL, args![4])),
                size.declare().assign(ctx.call(&rt_args::GET_ARG_VAL, args![5])),
                ctx.comment(""),
                src_noc_addr.declare().assign(ctx.call(
                    &noc::GET_NOC_ADDR_FROM_BANK_ID_TRUE,
                    args![src_bank, src_addr, noc0]
                )),
                ctx.comment(""),
                ctx.call(&noc::NOC_ASYNC_READ, args![src_noc_addr, l1_buffer_addr, size, noc0]),
                ctx.call(&noc::NOC_ASYNC_READ_BARRIER, args![noc0]),
                ctx.comment(""),
                dst_noc_addr.declare().assign(ctx.call(
                    &noc::GET_NOC_ADDR_FROM_BANK_ID_TRUE,
                    args![dst_bank, dst_addr, noc0]
                )),
                ctx.comment(""),
                ctx.call(&noc::NOC_ASYNC_WRITE, args![l1_buffer_addr, dst_noc_addr, size, noc0]),
                ctx.call(&noc::NOC_ASYNC_WRITE_BARRIER, args![noc0]),
            ]),
        ],
    )
    .map(AnyKernel::from)
}

pub fn eltwise_add() -> Result<AnyKernel, CodegenError> {
    let ctx = KernelContext::<Crisc>::new();
    let block_count = ctx.scalar("per_core_block_cnt", PrimKind::U32);
    let cb_in0 = ctx.scalar("cb_in0", PrimKind::U32);
    let cb_in1 = ctx.scalar("cb_in1", PrimKind::U32);
    let cb_out0 = ctx.scalar("cb_out0", PrimKind::U32);
    let block = ctx.scalar("block", PrimKind::U32);

    Kernel::new(
        &ctx,
        stmts![
            ctx.include_local("compute_kernel_api/eltwise_binary.h"),
            ctx.kernel_main(stmts![
                block_count.declare().assign(ctx.call(&rt_args::GET_ARG_VAL, args![0])),
                cb_in0.declare().assign(0u32),
                cb_in1.declare().assign(1u32),
                cb_out0.declare().assign(16u32),
                ctx.call(&compute::BINARY_OP_INIT_COMMON, args![cb_in0, cb_in1, cb_out0]),
                ctx.call(&compute::ADD_TILES_INIT, args![cb_in0, cb_in1, false]),
                ctx.for_(
                    block.declare().assign(0u32),
                    block.lt(block_count),
                    block.assign(block + 1u32),
                    stmts![
                        ctx.call(&compute::CB_WAIT_FRONT, args![cb_in0, 1u32]),
                        ctx.call(&compute::CB_WAIT_FRONT, args![cb_in1, 1u32]),
                        ctx.call(&compute::CB_RESERVE_BACK, args![cb_out0, 1u32]),
                        ctx.call(&compute::TILE_REGS_ACQUIRE, args![]),
                        ctx.call(&compute::ADD_TILES, args![cb_in0, cb_in1, 0u32, 0u32, 0u32]),
                        ctx.call(&compute::TILE_REGS_COMMIT, args![]),
                        ctx.call(&compute::TILE_REGS_WAIT, args![]),
                        ctx.call(&pack::PACK_TILE_FALSE, args![0u32, cb_out0]),
                        ctx.call(&compute::TILE_REGS_RELEASE, args![]),
                        ctx.call(&compute::CB_POP_FRONT, args![cb_in0, 1u32]),
                        ctx.call(&compute::CB_POP_FRONT, args![cb_in1, 1u32]),
                        ctx.call(&compute::CB_PUSH_BACK, args![cb_out0, 1u32]),
                    ],
                ),
            ]),
        ],
    )
    .map(AnyKernel::from)
}

pub fn branches() -> Result<AnyKernel, CodegenError> {
    let ctx = KernelContext::<Brisc>::new();
    let scale = FunctionDecl::new(
        "scale_tile",
        vec![
            ValueType::array(PrimKind::F32),
            ValueType::scalar(PrimKind::U32),
        ],
        None,
    );
    let data = ctx.placeholder(TILE_DATA);
    let len = ctx.placeholder(TILE_LEN);
    let mode = ctx.scalar("mode", PrimKind::U32);
    let tiles = ctx.array("tiles", PrimKind::F32, 32);
    let count = ctx.scalar("count", PrimKind::U32);

    Kernel::new(
        &ctx,
        stmts![
            ctx.function(
                &scale,
                &[TILE_DATA, TILE_LEN],
                stmts![ctx.while_(
                    len.gt(0u32),
                    stmts![
                        len.assign(len - 1u32),
                        data.at(len).assign(data.at(len) * 0.5f32),
                    ]
                )],
            ),
            ctx.kernel_main(stmts![
                mode.declare().assign(ctx.call(&rt_args::GET_ARG_VAL, args![0])),
                tiles.declare(),
                count.declare().assign(32u32),
                ctx.if_(mode.equals(0u32), stmts![ctx.comment("identity")])
                    .else_if_(
                        mode.equals(1u32),
                        stmts![ctx.call(&scale, args![tiles, count])]
                    )
                    .else_(stmts![count.assign(0u32)]),
                ctx.switch_(mode)
                    .case_(0u32, stmts![ctx.comment("mode 0")])
                    .case_(1u32, stmts![count.assign(count - 1u32)])
                    .default_(stmts![ctx.comment("unknown mode")]),
            ]),
        ],
    )
    .map(AnyKernel::from)
}
