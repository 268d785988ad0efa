//! Debug printing.

use tt_ir::FunctionDecl;

intrinsics! {
    DPRINT = "DPRINT"();
}
