pub mod enquate_form;
