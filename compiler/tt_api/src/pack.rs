//! Packing results out of the destination registers.

use tt_ir::FunctionDecl;

intrinsics! {
    PACK_TILE_TRUE = "pack_tile<true>"(U32, U32, U32, U32);
    PACK_TILE_FALSE = "pack_tile<false>"(U32, U32, U32, U32);
    MATMUL_PACK_TILE = "matmul_pack_tile"(U32, U32, U32);
}
