pub mod add;
pub mod vscale;

pub use add::{add_u32, add_u32_into, add_u32_traced};
pub use vscale::{
    vscale, vscale_checked, vscale_inplace, vscale_f32, vscale_f64, vscale_i32, vscale_i64,
    vscale_u32, vscale_u64,
};
