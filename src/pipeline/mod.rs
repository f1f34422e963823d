pub mod stage1_load;
pub mod stage2_strict;
pub mod stage3_loose;
pub mod stage4_distribution;
pub mod stage5_render;
