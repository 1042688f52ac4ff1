//! The single page served at `/`.
//!
//! The page keeps no state of its own: every action posts to the API and
//! re-renders from the returned view.

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Nano Banana - Magic Image to Prompt</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            background: #fffbeb;
            min-height: 100vh;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            padding: 20px;
        }

        header {
            text-align: center;
            margin-bottom: 30px;
        }

        h1 {
            color: #eab308;
            font-size: 3.5em;
            letter-spacing: -1px;
        }

        .subtitle {
            color: #b45309;
            font-size: 1.25em;
            margin-top: 4px;
        }

        .container {
            background: rgba(255, 255, 255, 0.6);
            border: 2px dashed #fcd34d;
            border-radius: 24px;
            box-shadow: 0 10px 30px rgba(0,0,0,0.08);
            max-width: 680px;
            width: 100%;
            padding: 24px;
        }

        .upload-area {
            border: 2px dashed #fcd34d;
            border-radius: 16px;
            aspect-ratio: 16 / 9;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            cursor: pointer;
            transition: all 0.3s;
            background: #fffbeb;
            color: #b45309;
            overflow: hidden;
        }

        .upload-area:hover {
            background: #fef3c7;
        }

        .upload-area.dragover {
            border-color: #eab308;
            background: #fefce8;
        }

        .upload-icon {
            font-size: 3em;
            margin-bottom: 12px;
        }

        .upload-text {
            font-size: 1.1em;
            margin-bottom: 6px;
        }

        .upload-hint {
            font-size: 0.85em;
        }

        .preview-image {
            width: 100%;
            height: 100%;
            object-fit: contain;
        }

        .image-meta {
            margin-top: 8px;
            font-size: 0.8em;
            color: #b45309;
            text-align: center;
        }

        input[type="file"] {
            display: none;
        }

        h2 {
            color: #92400e;
            font-size: 1.2em;
            margin: 24px 0 12px;
            text-align: center;
        }

        .styles {
            display: flex;
            flex-wrap: wrap;
            justify-content: center;
            gap: 8px;
        }

        .style-btn {
            padding: 8px 16px;
            border-radius: 999px;
            border: 2px solid #fcd34d;
            background: transparent;
            color: #b45309;
            font-weight: 600;
            cursor: pointer;
        }

        .style-btn.active {
            background: #facc15;
            border-color: #facc15;
            color: #78350f;
        }

        .generate-btn {
            display: flex;
            align-items: center;
            justify-content: center;
            gap: 8px;
            margin: 24px auto 0;
            width: 100%;
            max-width: 320px;
            padding: 12px 24px;
            border: none;
            border-radius: 999px;
            background: #facc15;
            color: #78350f;
            font-weight: 700;
            font-size: 1em;
            cursor: pointer;
        }

        .generate-btn:disabled {
            background: #fef08a;
            cursor: not-allowed;
        }

        .spinner {
            border: 3px solid #fef3c7;
            border-top: 3px solid #b45309;
            border-radius: 50%;
            width: 18px;
            height: 18px;
            animation: spin 1s linear infinite;
        }

        @keyframes spin {
            0% { transform: rotate(0deg); }
            100% { transform: rotate(360deg); }
        }

        .result {
            position: relative;
            background: #fffbeb;
            border: 1px solid #fde68a;
            border-radius: 10px;
            padding: 16px;
            margin-top: 12px;
        }

        .result-text {
            color: #374151;
            font-size: 1.1em;
            line-height: 1.6;
            padding-right: 40px;
        }

        .copy-btn {
            position: absolute;
            top: 8px;
            right: 8px;
            border: none;
            border-radius: 50%;
            width: 34px;
            height: 34px;
            background: #fef08a;
            cursor: pointer;
        }

        .meta-info {
            display: flex;
            justify-content: space-between;
            margin-top: 12px;
            padding-top: 12px;
            border-top: 1px solid #fde68a;
            font-size: 0.8em;
            color: #92400e;
        }

        .error {
            background: #fee2e2;
            color: #dc2626;
            padding: 12px;
            border-radius: 10px;
            margin-top: 16px;
        }

        .warning {
            background: #fef3c7;
            color: #92400e;
            padding: 10px;
            border-radius: 10px;
            margin-bottom: 16px;
            font-size: 0.9em;
        }

        .hidden {
            display: none !important;
        }

        footer {
            margin-top: 40px;
            color: rgba(217, 119, 6, 0.8);
            font-size: 0.85em;
        }
    </style>
</head>
<body>
    <header>
        <h1>Nano Banana</h1>
        <p class="subtitle">Magic Image to Prompt</p>
    </header>

    <div class="container">
        <div class="warning hidden" id="configWarning">
            GEMINI_API_KEY is not configured. Prompt generation will fail until it is set.
        </div>

        <label class="upload-area" id="uploadArea">
            <div id="uploadPlaceholder">
                <div class="upload-icon">&#128247;</div>
                <div class="upload-text"><strong>Click to upload</strong> or drag and drop</div>
                <div class="upload-hint">PNG, JPG, GIF or WEBP</div>
            </div>
            <img id="previewImage" class="preview-image hidden" alt="Preview">
            <input type="file" id="fileInput" accept="image/*">
        </label>
        <div class="image-meta hidden" id="imageMeta"></div>

        <div id="stylePanel" class="hidden">
            <h2>&#127912; Choose a Style</h2>
            <div class="styles" id="styles"></div>
        </div>

        <button class="generate-btn hidden" id="generateBtn"></button>

        <div class="error hidden" id="error"></div>

        <div id="resultPanel" class="hidden">
            <h2>Your Magic Prompt &#10024;</h2>
            <div class="result">
                <p class="result-text" id="promptText"></p>
                <button class="copy-btn" id="copyBtn" aria-label="Copy prompt"></button>
                <div class="meta-info">
                    <span>Model: <strong id="modelName"></strong></span>
                    <span>Processing: <strong id="processingTime"></strong>ms</span>
                </div>
            </div>
        </div>
    </div>

    <footer>
        <p>Rust + Axum + Google Gemini</p>
    </footer>

    <script>
        const $ = (id) => document.getElementById(id);
        const uploadArea = $('uploadArea');
        const fileInput = $('fileInput');
        const generateBtn = $('generateBtn');
        let view = null;
        let copyTimer = null;

        function render(next) {
            view = next;

            $('configWarning').classList.toggle('hidden', view.configured);

            const hasImage = view.image !== null;
            $('uploadPlaceholder').classList.toggle('hidden', hasImage);
            $('previewImage').classList.toggle('hidden', !hasImage);
            $('imageMeta').classList.toggle('hidden', !hasImage);
            if (hasImage) {
                if ($('previewImage').getAttribute('src') !== view.image.preview_url) {
                    $('previewImage').src = view.image.preview_url;
                }
                const size = view.image.width ? ` • ${view.image.width}×${view.image.height}` : '';
                $('imageMeta').textContent = view.image.file_name + size;
            }

            $('stylePanel').classList.toggle('hidden', !hasImage);
            const styles = $('styles');
            styles.innerHTML = '';
            for (const s of view.styles) {
                const btn = document.createElement('button');
                btn.className = 'style-btn' + (s === view.style ? ' active' : '');
                btn.textContent = s;
                btn.addEventListener('click', () => selectStyle(s));
                styles.appendChild(btn);
            }

            generateBtn.classList.toggle('hidden', !hasImage);
            generateBtn.disabled = view.loading || !view.can_generate;
            generateBtn.innerHTML = view.loading
                ? '<div class="spinner"></div> Generating...'
                : '&#10024; Generate Magic Prompt';

            $('error').classList.toggle('hidden', !view.error);
            $('error').innerHTML = '';
            if (view.error) {
                const strong = document.createElement('strong');
                strong.textContent = 'Error: ';
                $('error').append(strong, view.error);
            }

            const hasResult = view.result !== null && !view.loading;
            $('resultPanel').classList.toggle('hidden', !hasResult);
            if (hasResult) {
                $('promptText').textContent = view.result.text;
                $('modelName').textContent = view.result.model;
                $('processingTime').textContent = view.result.elapsed_ms;
            }
            $('copyBtn').innerHTML = view.copied ? '&#10003;' : '&#128203;';
        }

        async function call(method, url, body) {
            const response = await fetch(url, body === undefined ? { method } : {
                method,
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify(body),
            });
            const data = await response.json();
            if (!response.ok) {
                throw new Error(data.error || 'Request failed');
            }
            return data;
        }

        function handleFiles(files) {
            if (!files || !files[0]) {
                return;
            }
            const file = files[0];
            if (!file.type.startsWith('image/')) {
                alert('Please upload a valid image file.');
                return;
            }
            const formData = new FormData();
            formData.append('image', file);
            fetch('/api/image', { method: 'POST', body: formData })
                .then(async (response) => {
                    const data = await response.json();
                    if (!response.ok) {
                        alert(data.error);
                        return;
                    }
                    render(data);
                })
                .catch((e) => alert(e.message));
        }

        async function selectStyle(style) {
            render(await call('PUT', '/api/style', { style }));
        }

        generateBtn.addEventListener('click', async () => {
            if (!view || !view.can_generate) {
                return;
            }
            render({ ...view, loading: true, can_generate: false, error: null, result: null });
            try {
                render(await call('POST', '/api/generate'));
            } catch (e) {
                render(await call('GET', '/api/state'));
            }
        });

        $('copyBtn').addEventListener('click', async (e) => {
            e.preventDefault();
            if (view && view.result && navigator.clipboard) {
                navigator.clipboard.writeText(view.result.text).catch(() => {});
            }
            render(await call('POST', '/api/copy'));
            clearTimeout(copyTimer);
            copyTimer = setTimeout(async () => render(await call('GET', '/api/state')), 2000);
        });

        fileInput.addEventListener('change', (e) => handleFiles(e.target.files));

        ['dragenter', 'dragover'].forEach((name) => uploadArea.addEventListener(name, (e) => {
            e.preventDefault();
            e.stopPropagation();
            uploadArea.classList.add('dragover');
        }));

        uploadArea.addEventListener('dragleave', (e) => {
            e.preventDefault();
            e.stopPropagation();
            uploadArea.classList.remove('dragover');
        });

        uploadArea.addEventListener('drop', (e) => {
            e.preventDefault();
            e.stopPropagation();
            uploadArea.classList.remove('dragover');
            handleFiles(e.dataTransfer.files);
        });

        call('GET', '/api/state').then(render);
    </script>
</body>
</html>
"#;
