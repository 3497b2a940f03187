//! In-memory WAV encoding of captured PCM.

use std::io::Cursor;

use crate::error::PipelineError;

/// Wrap concatenated i16-LE PCM bytes in a WAV container.
pub(crate) fn encode_wav(
    pcm: &[u8],
    channels: u16,
    sample_rate: u32,
) -> Result<Vec<u8>, PipelineError> {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = hound::WavWriter::new(&mut cursor, spec)
        .map_err(|e| PipelineError::AudioInput(format!("WAV encoding failed: {e}")))?;

    for sample in pcm.chunks_exact(2) {
        writer
            .write_sample(i16::from_le_bytes([sample[0], sample[1]]))
            .map_err(|e| PipelineError::AudioInput(format!("WAV encoding failed: {e}")))?;
    }

    writer
        .finalize()
        .map_err(|e| PipelineError::AudioInput(format!("WAV encoding failed: {e}")))?;

    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_a_riff_wave_container() {
        let pcm: Vec<u8> = [0i16, 100, -100, 32767]
            .iter()
            .flat_map(|s| s.to_le_bytes())
            .collect();

        let wav = encode_wav(&pcm, 1, 16_000).unwrap();
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        // 44-byte canonical header followed by the sample data
        assert_eq!(wav.len(), 44 + pcm.len());
    }
}
