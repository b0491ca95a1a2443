//! Stylesheet and script embedded in every page.

/// Page stylesheet
pub const STYLE: &str = r#"
        body {
            font-family: Arial, sans-serif;
            margin: 20px;
            background-color: #f5f5f5;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
            background-color: white;
            padding: 20px;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }
        .return-button {
            display: inline-block;
            margin-bottom: 20px;
            padding: 10px 15px;
            background-color: #6c757d;
            color: white;
            text-decoration: none;
            border-radius: 5px;
            transition: background-color 0.3s;
            position: absolute;
            top: 20px;
            left: 20px;
            z-index: 1000;
        }
        .return-button:hover { background-color: #5a6268; }
        h1 {
            color: #333;
            text-align: center;
            border-bottom: 3px solid #007bff;
            padding-bottom: 10px;
        }
        h2 {
            color: #555;
            margin-top: 30px;
            margin-bottom: 15px;
            border-left: 4px solid #007bff;
            padding-left: 10px;
        }
        table {
            width: 100%;
            border-collapse: collapse;
            margin-bottom: 30px;
            background-color: white;
            font-size: 0.9em;
        }
        th {
            background-color: #007bff;
            color: white;
            padding: 10px 8px;
            text-align: left;
            font-weight: bold;
            cursor: pointer;
        }
        th:hover { background-color: #0056b3; }
        th.sortable { position: relative; padding-right: 25px; }
        th.sortable .sort-icon {
            position: absolute;
            right: 8px;
            top: 50%;
            transform: translateY(-50%);
            font-size: 0.8em;
            color: #fff;
            opacity: 0.6;
        }
        th.sortable:hover .sort-icon { opacity: 1; }
        td { padding: 8px; border-bottom: 1px solid #ddd; }
        tr:nth-child(even) { background-color: #f8f9fa; }
        tr:hover { background-color: #e3f2fd; }
        .damage { font-weight: bold; color: #d32f2f; }
        .frame { font-weight: bold; color: #388e3c; }
        .value { font-weight: bold; color: #0056b3; }
        .not-found {
            background-color: #fff3cd;
            border: 1px solid #ffeaa7;
            border-radius: 4px;
            padding: 15px;
            margin-top: 20px;
        }
        .not-found h3 { color: #856404; margin-top: 0; }
        .not-found-list {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
            gap: 5px;
            margin-top: 10px;
        }
        .fallback-info {
            background-color: #d1ecf1;
            border: 1px solid #bee5eb;
            border-radius: 4px;
            padding: 15px;
            margin-top: 20px;
        }
        .fallback-info h3 { color: #0c5460; margin-top: 0; }
        .timestamp {
            text-align: center;
            color: #666;
            font-size: 0.9em;
            margin-top: 20px;
            border-top: 1px solid #ddd;
            padding-top: 10px;
        }
        .shield-advantage-positive { font-weight: bold; color: #2e7d32; }
        .shield-advantage-negative { font-weight: bold; color: #d32f2f; }
        .shield-advantage-neutral { font-weight: bold; color: #f57c00; }
        .tooltip { position: relative; cursor: help; }
        .tooltip .tooltip-content {
            visibility: hidden;
            opacity: 0;
            position: absolute;
            z-index: 1000;
            bottom: 125%;
            left: 50%;
            transform: translateX(-50%);
            background-color: #333;
            color: white;
            text-align: left;
            padding: 10px;
            border-radius: 6px;
            font-size: 0.85em;
            line-height: 1.4;
            box-shadow: 0 4px 8px rgba(0,0,0,0.3);
            transition: opacity 0.3s, visibility 0.3s;
            max-width: 300px;
            white-space: normal;
        }
        .tooltip .tooltip-content::after {
            content: "";
            position: absolute;
            top: 100%;
            left: 50%;
            margin-left: -5px;
            border-width: 5px;
            border-style: solid;
            border-color: #333 transparent transparent transparent;
        }
        .tooltip:hover .tooltip-content { visibility: visible; opacity: 1; }
        .has-tooltip { background-color: #fff3e0 !important; }
        .has-tooltip:hover { background-color: #ffe0b2 !important; }
        .info-icon {
            display: inline-block;
            width: 16px;
            height: 16px;
            background-color: #007bff;
            color: white;
            border-radius: 50%;
            text-align: center;
            font-size: 12px;
            line-height: 16px;
            margin-left: 5px;
            cursor: help;
            font-weight: bold;
        }
        .info-icon:hover { background-color: #0056b3; }
        .section-header {
            position: relative;
            display: flex;
            align-items: center;
            justify-content: space-between;
        }
        .section-nav-dropdown { position: relative; display: inline-block; margin-left: 15px; }
        .dropdown-btn {
            background-color: #FF8400;
            color: white;
            padding: 8px 12px;
            font-size: 14px;
            border: none;
            border-radius: 4px;
            cursor: pointer;
            transition: background-color 0.3s;
        }
        .dropdown-btn:hover { background-color: #D6812D; }
        .dropdown-content {
            display: none;
            position: absolute;
            right: 0;
            background-color: #f9f9f9;
            min-width: 200px;
            box-shadow: 0px 8px 16px 0px rgba(0,0,0,0.2);
            z-index: 1;
            border-radius: 4px;
            max-height: 300px;
            overflow-y: auto;
        }
        .dropdown-content a {
            color: black;
            padding: 12px 16px;
            text-decoration: none;
            display: block;
            transition: background-color 0.3s;
        }
        .dropdown-content a:hover { background-color: #f1f1f1; }
        .dropdown-content a.current-section { background-color: #e3f2fd; font-weight: bold; }
        .show { display: block; }
        th.tooltip .tooltip-content { bottom: auto; top: 125%; }
        th.tooltip .tooltip-content::after {
            top: auto;
            bottom: 100%;
            border-color: transparent transparent #333 transparent;
        }
        .category-list { list-style: none; padding: 0; }
        .category-list li { margin: 10px 0; }
        .category-list a {
            display: block;
            padding: 12px 16px;
            background-color: #007bff;
            color: white;
            text-decoration: none;
            border-radius: 5px;
        }
        .category-list a:hover { background-color: #0056b3; }
"#;

/// Table sorting, section dropdowns and smooth scrolling
pub const SCRIPT: &str = r#"
        function sortTable(tableId, n) {
            var table, rows, switching, i, x, y, shouldSwitch, dir, switchcount = 0;
            table = document.getElementById(tableId);
            switching = true;
            dir = "asc";
            while (switching) {
                switching = false;
                rows = table.rows;
                for (i = 1; i < (rows.length - 1); i++) {
                    shouldSwitch = false;
                    x = rows[i].getElementsByTagName("TD")[n];
                    y = rows[i + 1].getElementsByTagName("TD")[n];
                    var xContent = x.innerHTML.replace(/<[^>]*>/g, "").trim();
                    var yContent = y.innerHTML.replace(/<[^>]*>/g, "").trim();
                    var xValue = parseFloat(xContent);
                    var yValue = parseFloat(yContent);
                    var numeric = !isNaN(xValue) && !isNaN(yValue) && xContent !== "N/A" && yContent !== "N/A";
                    if (dir == "asc") {
                        if (numeric ? xValue > yValue : xContent.toLowerCase() > yContent.toLowerCase()) {
                            shouldSwitch = true;
                            break;
                        }
                    } else if (dir == "desc") {
                        if (numeric ? xValue < yValue : xContent.toLowerCase() < yContent.toLowerCase()) {
                            shouldSwitch = true;
                            break;
                        }
                    }
                }
                if (shouldSwitch) {
                    rows[i].parentNode.insertBefore(rows[i + 1], rows[i]);
                    switching = true;
                    switchcount++;
                } else if (switchcount == 0 && dir == "asc") {
                    dir = "desc";
                    switching = true;
                }
            }
        }

        function toggleDropdown(dropdownId) {
            document.getElementById(dropdownId).classList.toggle("show");
        }

        window.onclick = function(event) {
            if (!event.target.matches('.dropdown-btn')) {
                var dropdowns = document.getElementsByClassName("dropdown-content");
                for (var i = 0; i < dropdowns.length; i++) {
                    dropdowns[i].classList.remove('show');
                }
            }
        }

        function scrollToSection(sectionId) {
            document.getElementById(sectionId).scrollIntoView({ behavior: 'smooth', block: 'start' });
        }

        document.addEventListener('DOMContentLoaded', function() {
            document.querySelectorAll('table').forEach(function(table) {
                if (!table.id) {
                    table.id = 'sortableTable_' + Math.random().toString(36).substr(2, 9);
                }
                table.querySelectorAll('th').forEach(function(th, index) {
                    th.addEventListener('click', function() {
                        sortTable(table.id, index);
                    });
                });
            });
        });
"#;
