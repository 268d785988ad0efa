//! Runtime and compile-time kernel arguments.

use tt_ir::FunctionDecl;

intrinsics! {
    GET_ARG_ADDR = "get_arg_addr"(I32) -> U32;
    GET_ARG_VAL = "get_arg_val"(I32) -> U32;
    GET_COMMON_ARG_ADDR = "get_common_arg_addr"(I32) -> U32;
    GET_COMMON_ARG_VAL = "get_common_arg_val"(I32) -> U32;
    GET_COMPILE_TIME_ARG_VAL = "get_compile_time_arg_val"(I32) -> U32;
}
