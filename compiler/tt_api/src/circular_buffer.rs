//! Circular buffer flow control from the data-movement cores.

use tt_ir::FunctionDecl;

intrinsics! {
    CB_PAGES_RESERVABLE_AT_BACK = "cb_pages_reservable_at_back"(I32, I32) -> BOOL;
    CB_PAGES_AVAILABLE_AT_FRONT = "cb_pages_available_at_front"(I32, I32) -> BOOL;
    CB_POP_FRONT = "cb_pop_front"(I32, I32);
    CB_PUSH_BACK = "cb_push_back"(I32, I32);
    CB_RESERVE_BACK = "cb_reserve_back"(I32, I32);
    CB_WAIT_FRONT = "cb_wait_front"(I32, I32);
}
