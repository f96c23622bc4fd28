pub mod enquate_params;
