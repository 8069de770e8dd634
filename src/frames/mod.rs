pub mod observation_frame;
