#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use std::sync::Arc;

    use gootool_core::codec::codecs::plain::PlainChunks;
    use gootool_core::codec::{
        codec_ids, BinCodec, ChunkTransform, CodecError, CodecInfo, CodecKind, CodecRegistry,
    };

    /// Stand-in for a platform codec supplied by the caller.
    #[derive(Debug)]
    struct InvertCodec;

    struct InvertChunks;

    impl ChunkTransform for InvertChunks {
        fn transform_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) {
            out.extend(input.iter().map(|b| !b));
        }
    }

    impl BinCodec for InvertCodec {
        fn kind(&self) -> CodecKind { CodecKind::AesBin }
        fn info(&self) -> CodecInfo { CodecInfo { name: "invert", obfuscates: true } }
        fn encode(&self, input: &[u8]) -> Vec<u8> { input.iter().map(|b| !b).collect() }
        fn decode(&self, input: &[u8]) -> Vec<u8> { input.iter().map(|b| !b).collect() }
        fn encoder(&self, _: usize) -> Box<dyn ChunkTransform> { Box::new(InvertChunks) }
        fn decoder(&self, _: usize) -> Box<dyn ChunkTransform> { Box::new(InvertChunks) }
    }

    #[test]
    fn defaults_register_known_transforms_only() {
        let reg = CodecRegistry::with_defaults();
        assert_eq!(reg.kinds(), vec![CodecKind::Plain, CodecKind::XorRotate]);
        assert!(!reg.contains(CodecKind::AesBin));
    }

    #[test]
    fn resolve_returns_same_instance() {
        let reg = CodecRegistry::with_defaults();
        let a = reg.resolve(CodecKind::XorRotate).unwrap();
        let b = reg.resolve(CodecKind::XorRotate).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.kind(), CodecKind::XorRotate);
    }

    #[test]
    fn unregistered_kind_is_an_error() {
        let reg = CodecRegistry::with_defaults();
        match reg.resolve(CodecKind::AesBin) {
            Err(CodecError::UnregisteredCodec { kind }) => assert_eq!(kind, CodecKind::AesBin),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn empty_registry_resolves_nothing() {
        let reg = CodecRegistry::new();
        assert!(reg.kinds().is_empty());
        assert!(reg.resolve(CodecKind::Plain).is_err());
        assert!(reg.resolve(CodecKind::XorRotate).is_err());
    }

    #[test]
    fn resolve_raw_ids() {
        let reg = CodecRegistry::with_defaults();
        assert_eq!(reg.resolve_raw(codec_ids::XOR_ROTATE).unwrap().kind(), CodecKind::XorRotate);
        assert_eq!(reg.resolve_raw(codec_ids::PLAIN).unwrap().kind(), CodecKind::Plain);
        assert!(matches!(
            reg.resolve_raw(0x00ff),
            Err(CodecError::UnknownCodec { raw: 0x00ff })
        ));
        assert!(matches!(
            reg.resolve_raw(codec_ids::AES_BIN),
            Err(CodecError::UnregisteredCodec { kind: CodecKind::AesBin })
        ));
    }

    #[test]
    fn require_reports_first_missing_kind() {
        let reg = CodecRegistry::with_defaults();
        assert!(reg.require(&[CodecKind::Plain, CodecKind::XorRotate]).is_ok());
        assert!(matches!(
            reg.require(&[CodecKind::XorRotate, CodecKind::AesBin]),
            Err(CodecError::UnregisteredCodec { kind: CodecKind::AesBin })
        ));
    }

    #[test]
    fn caller_supplied_codec_can_be_registered() {
        let reg = CodecRegistry::with_defaults().register(Arc::new(InvertCodec));
        let codec = reg.resolve(CodecKind::AesBin).unwrap();
        assert_eq!(codec.info().name, "invert");
        assert_eq!(codec.decode(&codec.encode(b"goo")), b"goo".to_vec());
        assert_eq!(reg.kinds().len(), 3);
    }

    #[test]
    fn registering_again_replaces() {
        let reg = CodecRegistry::new()
            .register(Arc::new(InvertCodec))
            .register(Arc::new(InvertCodec));
        assert_eq!(reg.kinds(), vec![CodecKind::AesBin]);
    }

    #[test]
    fn resolve_info_describes_codecs() {
        let reg = CodecRegistry::with_defaults();
        let plain = reg.resolve_info(CodecKind::Plain).unwrap();
        assert!(!plain.obfuscates);
        let xor = reg.resolve_info(CodecKind::XorRotate).unwrap();
        assert!(xor.obfuscates);
        assert_eq!(xor.name, "xor-rotate");
    }

    #[test]
    fn plain_codec_is_identity() {
        let reg = CodecRegistry::with_defaults();
        let plain = reg.resolve(CodecKind::Plain).unwrap();
        let data: Vec<u8> = (0u8..=255).collect();
        assert_eq!(plain.encode(&data), data);
        assert_eq!(plain.decode(&data), data);

        let mut out = Vec::new();
        PlainChunks.transform_chunk(&data, &mut out);
        assert_eq!(out, data);
    }

    #[test]
    fn codec_kind_ids_and_names() {
        assert_eq!(CodecKind::from_raw(codec_ids::AES_BIN).unwrap(), CodecKind::AesBin);
        assert!(CodecKind::from_raw(0x1234).is_err());
        assert_eq!(CodecKind::from_raw(1).unwrap(), CodecKind::XorRotate);
        assert_eq!(CodecKind::from_str("xor").unwrap(), CodecKind::XorRotate);
        assert_eq!(CodecKind::from_str("PLAIN").unwrap(), CodecKind::Plain);
        assert!(CodecKind::from_str("rot13").is_err());
        assert_eq!(CodecKind::XorRotate.to_string(), "xor");
    }

    #[test]
    fn error_messages_are_readable() {
        let e = CodecError::UnknownCodec { raw: 0x00ff };
        assert_eq!(e.to_string(), "unknown codec id: 0x00ff");
        let e = CodecError::UnregisteredCodec { kind: CodecKind::AesBin };
        assert_eq!(e.to_string(), "no codec registered for AesBin");
    }
}
