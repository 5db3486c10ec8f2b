pub mod payment_gate;
