use pretty_assertions::assert_eq;
use rustc_hash::FxHashSet;
use tt_dsl::{args, stmts, Brisc, Crisc, Kernel, KernelContext, PrimKind};
use tt_ir::{ValueForm, ValueType};

use super::*;

#[test]
fn catalog_names_are_unique_per_module() {
    for table in [
        debug::ALL,
        args::ALL,
        circular_buffer::ALL,
        noc::ALL,
        compute::ALL,
        pack::ALL,
    ] {
        let names: FxHashSet<&str> = table.iter().map(|d| d.name()).collect();
        assert_eq!(names.len(), table.len());
    }
    assert!(catalog().count() > 190);
}

#[test]
fn signatures_match_device_headers() {
    assert_eq!(args::GET_ARG_VAL.name(), "get_arg_val");
    assert_eq!(
        args::GET_ARG_VAL.params(),
        &[ValueType::scalar(PrimKind::I32)]
    );
    assert_eq!(
        noc::NOC_SEMAPHORE_WAIT.params()[0],
        ValueType {
            kind: PrimKind::U32,
            form: ValueForm::Pointer
        }
    );
    assert_eq!(noc::NOC_ASYNC_READ.params().len(), 4);
    assert_eq!(compute::TILE_REGS_ACQUIRE.params().len(), 0);
    assert_eq!(
        noc::GET_NOC_ADDR_FROM_BANK_ID_TRUE.to_string(),
        "uint64_t get_noc_addr_from_bank_id<true>(uint32_t, uint32_t, uint8_t)"
    );
}

#[test]
fn find_prefers_data_movement_variant() {
    let cb = find("cb_wait_front").map(|d| d.params().to_vec());
    assert_eq!(
        cb,
        Some(vec![
            ValueType::scalar(PrimKind::I32),
            ValueType::scalar(PrimKind::I32)
        ])
    );
    assert_eq!(
        compute::CB_WAIT_FRONT.params()[0],
        ValueType::scalar(PrimKind::U32)
    );
    assert!(find("no_such_intrinsic").is_none());
}

#[test]
fn hardware_constants_are_u32_symbols() {
    let ctx = KernelContext::<Brisc>::new();
    let noc = HwConst::Noc0.in_context(&ctx);
    let again = HwConst::Noc0.in_context(&ctx);
    assert_eq!(noc.id(), again.id());
    assert_eq!(noc.declare().render().ok().as_deref(), Some("uint32_t NOC0"));
    assert_eq!(HwConst::ALL.len(), 10);
}

#[test]
fn reader_loop_with_catalog_calls() {
    let ctx = KernelContext::<Brisc>::with_provenance("reader_unary");
    let src_addr = ctx.scalar("src_addr", PrimKind::U32);
    let num_tiles = ctx.scalar("num_tiles", PrimKind::U32);
    let i = ctx.scalar("i", PrimKind::U32);
    let cb_id = ctx.scalar("cb_id_in0", PrimKind::U32);

    let kernel = Kernel::new(
        &ctx,
        stmts![ctx.kernel_main(stmts![
            src_addr
                .declare()
                .assign(ctx.call(&args::GET_ARG_VAL, args![0])),
            num_tiles
                .declare()
                .assign(ctx.call(&args::GET_ARG_VAL, args![1])),
            cb_id.declare().assign(0u32),
            ctx.for_(
                i.declare().assign(0u32),
                i.lt(num_tiles),
                i.assign(i + 1u32),
                stmts![
                    ctx.call(&circular_buffer::CB_RESERVE_BACK, args![cb_id, 1]),
                    ctx.call(
                        &noc::NOC_ASYNC_READ,
                        args![src_addr, 0u32, 2048u32, HwConst::Noc0.in_context(&ctx)]
                    ),
                    ctx.call(&noc::NOC_ASYNC_READ_BARRIER, args![]),
                    ctx.call(&circular_buffer::CB_PUSH_BACK, args![cb_id, 1]),
                ],
            ),
        ])],
    )
    .map(|k| k.source().to_string());

    assert_eq!(
        kernel.as_deref(),
        Ok("void kernel_main() {\n\
            \x20   uint32_t src_addr = get_arg_val( 0 );\n\
            \x20   uint32_t num_tiles = get_arg_val( 1 );\n\
            \x20   uint32_t cb_id_in0 = 0;\n\
            \x20   for ( uint32_t i = 0 ; i < num_tiles ; i = i + 1 ) {\n\
            \x20       cb_reserve_back( cb_id_in0 , 1 );\n\
            \x20       noc_async_read( src_addr , 0 , 2048 , NOC0 );\n\
            \x20       noc_async_read_barrier();\n\
            \x20       cb_push_back( cb_id_in0 , 1 );\n\
            \x20   }\n\
            }\n")
    );
}

#[test]
fn compute_kernel_uses_tile_registers() {
    let ctx = KernelContext::<Crisc>::new();
    let kernel = Kernel::new(
        &ctx,
        stmts![ctx.kernel_main(stmts![
            ctx.call(&compute::TILE_REGS_ACQUIRE, args![]),
            ctx.call(&compute::ADD_TILES, args![0u32, 1u32, 0u32, 0u32, 0u32]),
            ctx.call(&compute::TILE_REGS_COMMIT, args![]),
        ])],
    );
    let source = kernel.map(|k| k.source().to_string());
    assert!(source
        .as_deref()
        .is_ok_and(|s| s.contains("    add_tiles( 0 , 1 , 0 , 0 , 0 );\n")));
}
