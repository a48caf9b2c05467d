pub mod tor_expert_bundle;
