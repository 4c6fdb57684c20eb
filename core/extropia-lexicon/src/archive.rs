//! Compiled dictionaries: the [`Dictionary`] serialized with rkyv.

use extropia_protocol::Dictionary;
use rkyv::ser::serializers::AllocSerializer;
use rkyv::ser::Serializer;
use rkyv::AlignedVec;

use crate::error::LexiconError;
use crate::Lexicon;

impl Lexicon {
    /// Loads a compiled dictionary, validating the archive before use.
    pub fn from_archive(bytes: &[u8]) -> Result<Self, LexiconError> {
        // Archives read from disk or fetched by the host need not be aligned.
        let mut aligned = AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(bytes);

        let dictionary = rkyv::from_bytes::<Dictionary>(&aligned)
            .map_err(|err| LexiconError::Archive(format!("{err:?}")))?;
        Ok(Self::from_dictionary(dictionary))
    }

    /// Serializes this lexicon's dictionary into an archive.
    pub fn to_archive(&self) -> Result<AlignedVec, LexiconError> {
        let mut serializer = AllocSerializer::<4096>::default();
        serializer
            .serialize_value(&self.to_dictionary())
            .map_err(|err| LexiconError::Archive(format!("{err:?}")))?;
        Ok(serializer.into_serializer().into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_reload() {
        let lexicon = Lexicon::builtin().unwrap();
        let bytes = lexicon.to_archive().unwrap();

        // Copy to an unaligned offset to simulate a host-provided buffer
        let mut shifted = vec![0u8];
        shifted.extend_from_slice(&bytes);

        let reloaded = Lexicon::from_archive(&shifted[1..]).unwrap();
        assert_eq!(reloaded.to_dictionary(), lexicon.to_dictionary());
        assert_eq!(reloaded.lookup("nyx-"), lexicon.lookup("nyx-"));
    }

    #[test]
    fn test_rejects_garbage() {
        let err = Lexicon::from_archive(&[0xde, 0xad, 0xbe, 0xef]).unwrap_err();
        assert!(matches!(err, LexiconError::Archive(_)));
    }
}
