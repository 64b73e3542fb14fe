pub mod invitation_cull;
