mod export_test;
mod interaction_test;
mod workflow_test;
