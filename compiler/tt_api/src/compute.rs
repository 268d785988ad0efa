//! Compute-core API: tile registers, copy, eltwise binary, broadcast,
//! reduce, matmul, tilize and the SFPU unary operations.

use tt_ir::FunctionDecl;

intrinsics! {
    COPY_TILE = "copy_tile"(U32, U32, U32);
    COPY_TILE_TO_DST_INIT_SHORT_WITH_DT = "copy_tile_to_dst_init_short_with_dt"(U32, U32, U32);
    COPY_TILE_TO_DST_INIT_SHORT = "copy_tile_to_dst_init_short"(U32, U32);
    COPY_TILE_INIT = "copy_tile_init"();
    ACQUIRE_DST = "acquire_dst"();
    RELEASE_DST = "release_dst"();
    TILE_REGS_ACQUIRE = "tile_regs_acquire"();
    TILE_REGS_WAIT = "tile_regs_wait"();
    TILE_REGS_COMMIT = "tile_regs_commit"();
    TILE_REGS_RELEASE = "tile_regs_release"();
    ABS_TILE = "abs_tile"(U32);
    ADD_TILES_INIT_NOF = "add_tiles_init_nof"();
    ADD_TILES_INIT = "add_tiles_init"(U32, U32, BOOL);
    ADD_TILES = "add_tiles"(U32, U32, U32, U32, U32);
    SUB_TILES_INIT_NOF = "sub_tiles_init_nof"();
    SUB_TILES_INIT = "sub_tiles_init"(U32, U32, BOOL);
    SUB_TILES = "sub_tiles"(U32, U32, U32, U32, U32);
    MUL_TILES_INIT_F = "mul_tiles_init_f"();
    MUL_TILES_INIT = "mul_tiles_init"(U32, U32);
    MUL_TILES = "mul_tiles"(U32, U32, U32, U32, U32);
    ADD_BCAST_COLS_INIT_SHORT = "add_bcast_cols_init_short"(U32, U32);
    ADD_BCAST_ROWS_INIT_SHORT = "add_bcast_rows_init_short"(U32, U32);
    ADD_TILES_BCAST_ROW = "add_tiles_bcast<BroadcastType::ROW>"(U32, U32, U32, U32, U32, U32);
    ADD_TILES_BCAST_COL = "add_tiles_bcast<BroadcastType::COL>"(U32, U32, U32, U32, U32, U32);
    SUB_BCAST_COLSS_INIT_SHORT = "sub_bcast_colss_init_short"(U32, U32);
    SUB_BCAST_ROWS_INIT_SHORT = "sub_bcast_rows_init_short"(U32, U32);
    SUB_TILES_BCAST_ROW = "sub_tiles_bcast<BroadcastType::ROW>"(U32, U32, U32, U32, U32, U32);
    SUB_TILES_BCAST_COL = "sub_tiles_bcast<BroadcastType::COL>"(U32, U32, U32, U32, U32, U32);
    MUL_BCAST_COLS_INIT_SHORT = "mul_bcast_cols_init_short"(U32, U32);
    MUL_BCAST_ROWS_INIT_SHORT = "mul_bcast_rows_init_short"(U32, U32);
    MUL_TILES_BCAST_ROW = "mul_tiles_bcast<BroadcastType::ROW>"(U32, U32, U32, U32, U32, U32);
    MUL_TILES_BCAST_COL = "mul_tiles_bcast<BroadcastType::COL>"(U32, U32, U32, U32, U32, U32);
    MUL_TILES_BCAST_SCALAR_INIT_SHORT = "mul_tiles_bcast_scalar_init_short"(U32, U32, U32, U32, U32);
    MM_INIT = "mm_init"(U32, U32, U32, U32);
    MM_INIT_SHORT_WITH_DT = "mm_init_short_with_dt"(U32, U32, U32, U32);
    MM_INIT_SHORT = "mm_init_short"(U32, U32, U32);
    MATMUL_TILES = "matmul_tiles"(U32, U32, U32, U32, U32, U32);
    MM_BLOCK_INIT = "mm_block_init"(U32, U32, U32, U32, U32, U32, U32);
    MM_BLOCK_INIT_SHORT = "mm_block_init_short"(U32, U32, U32, U32, U32, U32);
    MM_BLOCK_INIT_SHORT_DT = "mm_block_init_short_dt"(U32, U32, U32, U32, U32, U32, U32);
    MATMUL_BLOCK = "matmul_block"(U32, U32, U32, U32, U32, U32, U32, U32, U32);
    EXP_TILE_INIT = "exp_tile_init"();
    EXP_TILE = "exp_tile"(U32);
    EXP_TILE_INIT_TRUE = "exp_tile_init<true>"();
    EXP_TILE_TRUE = "exp_tile<true>"(U32);
    EXP2_TILE_INIT = "exp2_tile_init"();
    EXP2_TILE = "exp2_tile"(U32);
    EXPM1_TILE_INIT = "expm1_tile_init"();
    EXPM1_TILE = "expm1_tile"(U32);
    RELU_TILE_INIT = "relu_tile_init"();
    RELU_TILE = "relu_tile"(U32);
    RELU_MAX_TILE_INIT = "relu_max_tile_init"();
    RELU_MAX_TILE = "relu_max_tile"(U32, U32);
    RELU_MIN_TILE_INIT = "relu_min_tile_init"();
    RELU_MIN_TILE = "relu_min_tile"(U32, U32);
    LEAKY_RELU_TILE_INIT = "leaky_relu_tile_init"();
    LEAKY_RELU_TILE = "leaky_relu_tile"(U32, U32);
    ELU_TILE_INIT = "elu_tile_init"();
    ELU_TILE = "elu_tile"(U32, U32);
    ERF_TILE_INIT_FALSE = "erf_tile_init<false>"();
    ERF_TILE_FALSE = "erf_tile<false>"(U32);
    ERF_TILE_INIT = "erf_tile_init"();
    ERF_TILE = "erf_tile"(U32);
    ERFC_TILE_INIT_FALSE = "erfc_tile_init<false>"();
    ERFC_TILE_FALSE = "erfc_tile<false>"(U32);
    ERFC_TILE_INIT = "erfc_tile_init"();
    ERFC_TILE = "erfc_tile"(U32);
    ERFINV_TILE_INIT = "erfinv_tile_init"();
    ERFINV_TILE = "erfinv_tile"(U32);
    GELU_TILE_INIT_FALSE = "gelu_tile_init<false>"();
    GELU_TILE_FALSE = "gelu_tile<false>"(U32);
    GELU_TILE_INIT = "gelu_tile_init"();
    GELU_TILE = "gelu_tile"(U32);
    HEAVISIDE_TILE_INIT = "heaviside_tile_init"();
    HEAVISIDE_TILE = "heaviside_tile"(U32, U32);
    ISINF_TILE_INIT = "isinf_tile_init"();
    ISINF_TILE = "isinf_tile"(U32);
    ISPOSINF_TILE_INIT = "isposinf_tile_init"();
    ISPOSINF_TILE = "isposinf_tile"(U32);
    ISNEGINF_TILE_INIT = "isneginf_tile_init"();
    ISNEGINF_TILE = "isneginf_tile"(U32);
    ISFINITE_TILE_INIT = "isfinite_tile_init"();
    ISFINITE_TILE = "isfinite_tile"(U32);
    ISNAN_TILE = "isnan_tile"(U32);
    I0_TILE_INIT = "i0_tile_init"();
    I0_TILE = "i0_tile"(U32);
    LOGICAL_NOT_UNARY_TILE_INIT = "logical_not_unary_tile_init"();
    LOGICAL_NOT_UNARY_TILE = "logical_not_unary_tile"(U32);
    RECIP_TILE_INIT = "recip_tile_init"();
    RECIP_TILE = "recip_tile"(U32);
    SIGN_TILE_INIT = "sign_tile_init"();
    SIGN_TILE = "sign_tile"(U32);
    SQRT_TILE_INIT = "sqrt_tile_init"();
    SQRT_TILE = "sqrt_tile"(U32);
    RSQRT_TILE_INIT_FALSE = "rsqrt_tile_init<false>"();
    RSQRT_TILE_FALSE = "rsqrt_tile<false>"(U32);
    RSQRT_TILE_INIT = "rsqrt_tile_init"();
    RSQRT_TILE = "rsqrt_tile"(U32);
    SIGMOID_TILE_INIT = "sigmoid_tile_init"();
    SIGMOID_TILE = "sigmoid_tile"(U32);
    LOG_TILE_INIT = "log_tile_init"();
    LOG_TILE = "log_tile"(U32);
    LOG_WITH_BASE_TILE_INIT = "log_with_base_tile_init"();
    LOG_WITH_BASE_TILE = "log_with_base_tile"(U32, U32);
    POWER_TILE_INIT = "power_tile_init"();
    POWER_TILE = "power_tile"(U32, U32);
    RSUB_TILE_INIT = "rsub_tile_init"();
    RSUB_TILE = "rsub_tile"(U32, U32);
    SIGNBIT_TILE_INIT = "signbit_tile_init"();
    SIGNBIT_TILE = "signbit_tile"(U32);
    SQUARE_TILE_INIT = "square_tile_init"();
    SQUARE_TILE = "square_tile"(U32);
    REDUCE_TILE_SUM_R = "reduce_tile<ReduceFunc::Sum, Reduce::R>"(U32, U32, U32, U32, U32);
    REDUCE_TILE_SUM_C = "reduce_tile<ReduceFunc::Sum, Reduce::C>"(U32, U32, U32, U32, U32);
    REDUCE_TILE_SUM_RC = "reduce_tile<ReduceFunc::Sum, Reduce::RC>"(U32, U32, U32, U32, U32);
    REDUCE_TILE_MAX_R = "reduce_tile<ReduceFunc::Max, Reduce::R>"(U32, U32, U32, U32, U32);
    REDUCE_TILE_MAX_C = "reduce_tile<ReduceFunc::Max, Reduce::C>"(U32, U32, U32, U32, U32);
    REDUCE_TILE_MAX_RC = "reduce_tile<ReduceFunc::Max, Reduce::RC>"(U32, U32, U32, U32, U32);
    TRANSPOSE_WH_INIT = "transpose_wh_init"(U32, U32);
    TRANSPOSE_WH_TILE = "transpose_wh_tile"(U32, U32, U32);
    TANH_TILE_INIT = "tanh_tile_init"();
    TANH_TILE = "tanh_tile"(U32);
    TAN_TILE_INIT = "tan_tile_init"();
    TAN_TILE = "tan_tile"(U32);
    SIN_TILE_INIT = "sin_tile_init"();
    SIN_TILE = "sin_tile"(U32);
    COS_TILE_INIT = "cos_tile_init"();
    COS_TILE = "cos_tile"(U32);
    ASIN_TILE_INIT = "asin_tile_init"();
    ASIN_TILE = "asin_tile"(U32);
    ATAN_TILE_INIT = "atan_tile_init"();
    ATAN_TILE = "atan_tile"(U32);
    ACOS_TILE_INIT = "acos_tile_init"();
    ACOS_TILE = "acos_tile"(U32);
    LTZ_TILE_INIT = "ltz_tile_init"();
    LTZ_TILE = "ltz_tile"(U32);
    EQZ_TILE_INIT = "eqz_tile_init"();
    EQZ_TILE = "eqz_tile"(U32);
    LEZ_TILE_INIT = "lez_tile_init"();
    LEZ_TILE = "lez_tile"(U32);
    GTZ_TILE_INIT = "gtz_tile_init"();
    GTZ_TILE = "gtz_tile"(U32);
    GEZ_TILE_INIT = "gez_tile_init"();
    GEZ_TILE = "gez_tile"(U32);
    NEZ_TILE_INIT = "nez_tile_init"();
    NEZ_TILE = "nez_tile"(U32);
    UNARY_NE_TILE_INIT = "unary_ne_tile_init"();
    UNARY_NE_TILE = "unary_ne_tile"(U32, U32);
    UNARY_GT_TILE_INIT = "unary_gt_tile_init"();
    UNARY_GT_TILE = "unary_gt_tile"(U32, U32);
    UNARY_LT_TILE_INIT = "unary_lt_tile_init"();
    UNARY_LT_TILE = "unary_lt_tile"(U32, U32);
    CB_WAIT_FRONT = "cb_wait_front"(U32, U32);
    CB_POP_FRONT = "cb_pop_front"(U32, U32);
    CB_RESERVE_BACK = "cb_reserve_back"(U32, U32);
    CB_PUSH_BACK = "cb_push_back"(U32, U32);
    BINARY_OP_INIT_COMMON = "binary_op_init_common"(U32, U32, U32);
    BINARY_OP_SPECIFIC_INIT_TRUE_ELWADD = "binary_op_specific_init<true, EltwiseBinaryType::ELWADD>"();
    BINARY_OP_SPECIFIC_INIT_TRUE_ELWSUB = "binary_op_specific_init<true, EltwiseBinaryType::ELWSUB>"();
    BINARY_OP_SPECIFIC_INIT_TRUE_ELWMUL = "binary_op_specific_init<true, EltwiseBinaryType::ELWMUL>"();
    BINARY_OP_SPECIFIC_INIT_FALSE_ELWADD = "binary_op_specific_init<false, EltwiseBinaryType::ELWADD>"();
    BINARY_OP_SPECIFIC_INIT_FALSE_ELWSUB = "binary_op_specific_init<false, EltwiseBinaryType::ELWSUB>"();
    BINARY_OP_SPECIFIC_INIT_FALSE_ELWMUL = "binary_op_specific_init<false, EltwiseBinaryType::ELWMUL>"();
    TILIZE_INIT = "tilize_init"(U32, U32, U32);
    TILIZE_INIT_SHORT = "tilize_init_short"(U32, U32, U32);
    TILIZE_INIT_SHORT_WITH_DT = "tilize_init_short_with_dt"(U32, U32, U32, U32);
    TILIZE_BLOCK = "tilize_block"(U32, U32, U32);
    TILIZE_UNINIT = "tilize_uninit"(U32, U32);
    TILIZE_UNINIT_WITH_DT = "tilize_uninit_with_dt"(U32, U32, U32);
    UNTILIZE_INIT = "untilize_init"(U32, U32);
    UNTILIZE_INIT_SHORT = "untilize_init_short"(U32);
    UNTILIZE_BLOCK = "untilize_block"(U32, U32, U32, I32);
    UNTILIZE_UNINIT = "untilize_uninit"(U32);
}
