// Integration tests live in the [[test]] targets next to this crate.
