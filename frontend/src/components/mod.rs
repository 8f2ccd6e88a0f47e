pub mod badges;
pub mod common_toast;
